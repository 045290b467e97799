//! Volume persistence trait

use std::collections::HashMap;

use crate::error::Result;

/// Durable storage for per-sound volume preferences
///
/// Implementers persist a flat sound-id to volume mapping across
/// sessions. The mixer reads it once at construction and rewrites it
/// after every volume-affecting action.
///
/// The contract is deliberately loose: ids that were never persisted
/// are simply absent from `load`, and `save` is a full overwrite of
/// all known volumes. Both calls must be synchronous. Callers treat
/// failures as best-effort persistence loss, never as fatal, so
/// implementations should not panic on backend unavailability.
pub trait VolumeStore {
    /// Load all persisted volumes
    ///
    /// # Errors
    /// Returns an error if the backend is unavailable or holds
    /// unreadable data
    fn load(&self) -> Result<HashMap<String, f32>>;

    /// Persist the given volumes, replacing any previous contents
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written
    fn save(&self, volumes: &HashMap<String, f32>) -> Result<()>;
}
