//! Linear undo history.
//!
//! `History` is a stack of [`Snapshot`]s, most recent last. The caller
//! records a snapshot immediately before each capturing move; `undo` pops
//! the latest one and restores it into the engine. There is no redo: a
//! popped snapshot is dropped.
//!
//! Backed by `im::Vector`, so cloning a whole history (e.g. to show it in a
//! side panel) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::snapshot::Snapshot;
use crate::rules::GameEngine;

/// Undo stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vector<Snapshot>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot.
    pub fn record(&mut self, snapshot: Snapshot) {
        trace!(label = snapshot.label(), depth = self.snapshots.len() + 1, "history record");
        self.snapshots.push_back(snapshot);
    }

    /// Restore the most recent snapshot into `engine` and drop it.
    ///
    /// Returns `false` (and leaves `engine` alone) when there is nothing to
    /// undo.
    pub fn undo(&mut self, engine: &mut GameEngine) -> bool {
        let Some(snapshot) = self.snapshots.pop_back() else {
            trace!("undo on empty history");
            return false;
        };
        engine.restore_state(&snapshot);
        debug!(label = snapshot.label(), remaining = self.snapshots.len(), "undo");
        true
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot `undo` would restore next.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Labels, oldest first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.snapshots.iter().map(Snapshot::label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Position};

    #[test]
    fn test_new_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let mut history = History::new();
        let mut engine = GameEngine::default();
        engine.select_or_deselect(Position::new(3, 1));
        let before = engine.clone();

        assert!(!history.undo(&mut engine));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_record_and_undo() {
        let mut history = History::new();
        let mut engine = GameEngine::default();

        engine.select_or_deselect(Position::new(3, 1));
        history.record(engine.capture_state());
        engine.select_or_deselect(Position::new(3, 3));
        assert_eq!(engine.board().count_pegs(), 31);

        assert!(history.undo(&mut engine));
        assert_eq!(engine.board(), &Board::english());
        assert_eq!(engine.selection(), Some(Position::new(3, 1)));
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_is_lifo() {
        let mut history = History::new();
        let mut engine = GameEngine::default();

        history.record(engine.capture_state());
        engine.attempt_move(Position::new(3, 1), Position::new(3, 3)).unwrap();
        let after_first = engine.board().clone();

        history.record(engine.capture_state());
        engine.attempt_move(Position::new(1, 2), Position::new(3, 2)).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(Snapshot::pegs_remaining), Some(31));

        assert!(history.undo(&mut engine));
        assert_eq!(engine.board(), &after_first);
        assert!(history.undo(&mut engine));
        assert_eq!(engine.board(), &Board::english());
        assert!(!history.undo(&mut engine));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        let engine = GameEngine::default();
        history.record(engine.capture_state());
        history.record(engine.capture_state());

        history.clear();

        assert!(history.is_empty());
    }

    #[test]
    fn test_labels_oldest_first() {
        let mut history = History::new();
        let mut engine = GameEngine::default();

        history.record(engine.capture_state());
        engine.attempt_move(Position::new(3, 1), Position::new(3, 3)).unwrap();
        history.record(engine.capture_state());

        let pegs: Vec<_> = history.iter().map(Snapshot::pegs_remaining).collect();
        assert_eq!(pegs, vec![32, 31]);

        let labels: Vec<_> = history.labels().collect();
        assert!(labels[0].ends_with("32 pegs"));
        assert!(labels[1].ends_with("31 pegs"));
    }
}
