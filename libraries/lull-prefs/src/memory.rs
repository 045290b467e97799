//! In-memory volume store

use std::collections::HashMap;
use std::sync::Mutex;

use lull_core::{CoreError, Result, VolumeStore};

/// Volume store held entirely in memory
///
/// Used in tests and as the fallback when the host has no durable
/// storage. Contents last only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryVolumeStore {
    volumes: Mutex<HashMap<String, f32>>,
}

impl MemoryVolumeStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the given volumes
    pub fn with_volumes(volumes: HashMap<String, f32>) -> Self {
        Self {
            volumes: Mutex::new(volumes),
        }
    }
}

impl VolumeStore for MemoryVolumeStore {
    fn load(&self) -> Result<HashMap<String, f32>> {
        let volumes = self
            .volumes
            .lock()
            .map_err(|_| CoreError::storage("volume store lock poisoned"))?;
        Ok(volumes.clone())
    }

    fn save(&self, volumes: &HashMap<String, f32>) -> Result<()> {
        let mut stored = self
            .volumes
            .lock()
            .map_err(|_| CoreError::storage("volume store lock poisoned"))?;
        *stored = volumes.clone();
        Ok(())
    }
}
