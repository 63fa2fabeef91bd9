//! A running game: engine, undo history and clock wired together.

use chrono::Duration;
use tracing::{debug, info, instrument};

use super::clock::GameClock;
use crate::core::{GameConfig, Position};
use crate::history::History;
use crate::rules::{GameEngine, GestureOutcome, TerminalState};

/// One game of peg solitaire as a front end drives it.
///
/// `Session` is what a UI holds: it forwards clicks to the engine, takes a
/// snapshot right before every capturing click, stops the clock when the
/// game ends and resets everything on a new game.
///
/// ```
/// use peg_solitaire::core::{GameConfig, Position};
/// use peg_solitaire::rules::GestureOutcome;
/// use peg_solitaire::session::Session;
///
/// let mut session = Session::new(GameConfig::default());
/// session.click(Position::new(3, 1));
/// assert_eq!(session.click(Position::new(3, 3)), GestureOutcome::MoveSuccess);
/// assert_eq!(session.history().len(), 1);
///
/// assert!(session.undo());
/// assert_eq!(session.terminal().pegs_remaining, 32);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    engine: GameEngine,
    history: History,
    clock: GameClock,
    moves_made: usize,
}

impl Session {
    /// Start a new game from `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let engine = GameEngine::new(&config.layout);
        info!(pegs = engine.board().count_pegs(), "new session");
        Self {
            config,
            engine,
            history: History::new(),
            clock: GameClock::start(),
            moves_made: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Time played so far, excluding time spent stopped.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Whether the session accepts clicks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Jumps played and not undone.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    #[must_use]
    pub fn terminal(&self) -> TerminalState {
        self.engine.evaluate_terminal_state()
    }

    /// Discard the current game and start over from the configured layout.
    pub fn new_game(&mut self) {
        self.engine.reset(&self.config.layout);
        self.history.clear();
        self.clock = GameClock::start();
        self.moves_made = 0;
        info!(pegs = self.engine.board().count_pegs(), "new game");
    }

    /// Same as [`Session::new_game`]; the layout is always the configured one.
    pub fn restart(&mut self) {
        info!(moves = self.moves_made, "restart");
        self.new_game();
    }

    /// End the game early. The board stays as-is for display; history is
    /// dropped and clicks are ignored until the next new game.
    pub fn stop(&mut self) {
        self.clock.stop();
        self.history.clear();
        info!(pegs = self.engine.board().count_pegs(), "session stopped");
    }

    /// Forward a click to the engine.
    ///
    /// A click that will capture a peg is snapshotted first (when history is
    /// enabled). After a successful jump the terminal state is checked and
    /// the clock stops if the game is over.
    #[instrument(skip_all, fields(row = pos.row, col = pos.col))]
    pub fn click(&mut self, pos: Position) -> GestureOutcome {
        if !self.is_running() {
            debug!("click ignored, session not running");
            return GestureOutcome::NoAction;
        }

        if self.config.record_history && self.engine.would_capture(pos) {
            self.history.record(self.engine.capture_state());
        }

        let outcome = self.engine.select_or_deselect(pos);
        if outcome == GestureOutcome::MoveSuccess {
            self.moves_made += 1;
            let terminal = self.terminal();
            if terminal.game_over {
                self.clock.stop();
                info!(
                    win = terminal.is_win,
                    pegs = terminal.pegs_remaining,
                    moves = self.moves_made,
                    "game over"
                );
            }
        }
        outcome
    }

    /// Take back the last capturing move.
    ///
    /// Returns `false` if there is nothing to undo. Undoing out of a finished
    /// game resumes the clock.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.engine) {
            return false;
        }
        self.moves_made = self.moves_made.saturating_sub(1);
        if !self.clock.is_running() && !self.terminal().game_over {
            self.clock.resume();
        }
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
