//! Elapsed-time tracking for a game.
//!
//! The clock is independent of the engine: it never reads or writes game
//! state. The session stops it when a game ends and resumes it if an undo
//! brings the game back.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Wall-clock timer that can be stopped and resumed.
///
/// Time spent stopped is not counted once the clock resumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    started_at: DateTime<Utc>,
    stopped_at: Option<DateTime<Utc>>,
}

impl GameClock {
    /// A running clock started now.
    #[must_use]
    pub fn start() -> Self {
        Self::start_at(Utc::now())
    }

    #[must_use]
    pub fn start_at(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            stopped_at: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.stopped_at.is_none()
    }

    pub fn stop(&mut self) {
        self.stop_at(Utc::now());
    }

    /// Freeze the elapsed time. No-op if already stopped.
    pub fn stop_at(&mut self, now: DateTime<Utc>) {
        if self.stopped_at.is_none() {
            self.stopped_at = Some(now);
        }
    }

    pub fn resume(&mut self) {
        self.resume_at(Utc::now());
    }

    /// Restart counting from the frozen elapsed time. No-op if running.
    pub fn resume_at(&mut self, now: DateTime<Utc>) {
        if let Some(stopped_at) = self.stopped_at.take() {
            self.started_at += now - stopped_at;
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Utc::now())
    }

    #[must_use]
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        let end = self.stopped_at.unwrap_or(now);
        (end - self.started_at).max(Duration::zero())
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::start()
    }
}

/// `mm:ss`, or `h:mm:ss` past the hour.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
