//! One-slot mix history
//!
//! Holds at most one snapshot of the sound map, taken immediately
//! before a clearing action. Restoring consumes the slot; any
//! subsequent selection-affecting action invalidates it. Single-slot
//! by design: bounded memory, and no way to restore a stale mix.

use crate::types::MixSnapshot;

/// Single-slot snapshot store
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshot: Option<MixSnapshot>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot, replacing any previous one
    pub fn put(&mut self, snapshot: MixSnapshot) {
        self.snapshot = Some(snapshot);
    }

    /// Take the snapshot out, leaving the slot empty
    pub fn take(&mut self) -> Option<MixSnapshot> {
        self.snapshot.take()
    }

    /// Drop any stored snapshot
    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    /// Whether no snapshot is stored
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_none()
    }
}
