//! Linear undo/redo history over full-scene snapshots.

use crate::shapes::Shape;
use serde::{Deserialize, Serialize};

/// Maximum number of history entries to keep.
pub const MAX_HISTORY: usize = 50;

/// An immutable snapshot of the scene, in z-order (back to front).
///
/// Captured after each completed mutation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub shapes: Vec<Shape>,
}

impl Snapshot {
    /// Snapshot of an empty scene.
    pub fn empty() -> Self {
        Self { shapes: Vec::new() }
    }
}

/// A single linear sequence of snapshots with a current-position cursor.
///
/// Committing while the cursor is not at the end discards every entry past
/// it: classic linear undo, no branching. Navigation at a boundary is a
/// silent no-op.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Snapshot>,
    /// Index of the entry matching the current scene state.
    cursor: usize,
}

impl History {
    /// Create an empty history. The session commits the initial scene
    /// state immediately after construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot as the new current entry, discarding any entries
    /// that were redoable.
    pub fn commit(&mut self, snapshot: Snapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        // Bound memory: drop the oldest entry, never the cursor's.
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back one entry. Returns the snapshot to apply, or `None` at
    /// the start boundary.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. Returns the snapshot to apply, or `None`
    /// at the end boundary.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entry has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
