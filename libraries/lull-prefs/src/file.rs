//! JSON-file-backed volume store

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lull_core::{Result, VolumeStore};

/// Volume store persisting to a single JSON file
///
/// The file holds one flat object mapping sound id to volume, e.g.
/// `{"rain": 0.3, "wind": 0.8}`. A missing file reads as empty (no
/// preferences saved yet); malformed contents are an error that the
/// mixer downgrades to "no saved preference".
#[derive(Debug, Clone)]
pub struct FileVolumeStore {
    path: PathBuf,
}

impl FileVolumeStore {
    /// Create a store backed by the given file path
    ///
    /// The file is not touched until the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VolumeStore for FileVolumeStore {
    fn load(&self) -> Result<HashMap<String, f32>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no volume file yet, starting empty");
            return Ok(HashMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let volumes = serde_json::from_str(&contents)?;
        Ok(volumes)
    }

    fn save(&self, volumes: &HashMap<String, f32>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string(volumes)?;
        std::fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), count = volumes.len(), "saved volumes");
        Ok(())
    }
}
