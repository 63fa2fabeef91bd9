//! Undo support: snapshots and the history stack.
//!
//! A [`Snapshot`] is one concrete value type holding a deep copy of the
//! engine state; [`History`] keeps them in order and restores the latest
//! on undo.

pub mod manager;
pub mod snapshot;

pub use manager::History;
pub use snapshot::Snapshot;
