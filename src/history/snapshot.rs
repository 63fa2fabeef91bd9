//! Immutable captures of engine state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::EngineState;

/// A frozen copy of the engine state, with a label for display.
///
/// The stored state is never handed out by reference to anything that
/// could mutate it: [`Snapshot::state`] always returns a fresh copy, so a
/// snapshot reads the same no matter what happens to the live game or to
/// previously returned copies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    state: EngineState,
    label: String,
    created_at: DateTime<Utc>,
}

impl Snapshot {
    /// Capture `state` now.
    #[must_use]
    pub fn capture(state: &EngineState) -> Self {
        Self::capture_at(state, Utc::now())
    }

    /// Capture `state` with an explicit creation time.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use peg_solitaire::core::EngineState;
    /// use peg_solitaire::history::Snapshot;
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 5, 1, 14, 3, 27).unwrap();
    /// let snapshot = Snapshot::capture_at(&EngineState::default(), at);
    /// assert_eq!(snapshot.label(), "14:03:27 - 32 pegs");
    /// ```
    #[must_use]
    pub fn capture_at(state: &EngineState, created_at: DateTime<Utc>) -> Self {
        let state = state.clone();
        let label = Self::make_label(&state, created_at);
        trace!(%label, "snapshot captured");
        Self {
            state,
            label,
            created_at,
        }
    }

    fn make_label(state: &EngineState, created_at: DateTime<Utc>) -> String {
        let pegs = state.pegs_remaining();
        let noun = if pegs == 1 { "peg" } else { "pegs" };
        format!("{} - {} {}", created_at.format("%H:%M:%S"), pegs, noun)
    }

    /// A fresh copy of the captured state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state.clone()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn pegs_remaining(&self) -> usize {
        self.state.pegs_remaining()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
