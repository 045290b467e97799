//! Core types for the mixer state machine

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Live state of one catalog sound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundState {
    /// Whether the sound is part of the active mix
    pub is_selected: bool,

    /// User-marked favorite, independent of selection
    pub is_favorite: bool,

    /// Playback gain in [0.0, 1.0], applied when selected
    pub volume: f32,
}

impl SoundState {
    /// Fresh state with the given volume: unselected, not a favorite
    pub fn with_volume(volume: f32) -> Self {
        Self {
            is_selected: false,
            is_favorite: false,
            volume,
        }
    }
}

/// Deep copy of the full sound map at a point in time
///
/// Used for the one-slot history: an explicit, typed clone rather than
/// a serialization round-trip.
pub type MixSnapshot = HashMap<String, SoundState>;

/// Configuration for the mixer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixerConfig {
    /// Volume for sounds with no persisted preference (default: 0.5)
    pub default_volume: f32,

    /// How many sounds a shuffle selects (default: 4)
    pub shuffle_count: usize,

    /// Lower bound of the shuffle volume range, inclusive (default: 0.2)
    pub shuffle_volume_min: f32,

    /// Upper bound of the shuffle volume range, exclusive (default: 1.0)
    ///
    /// Deliberately above the reset default so shuffled mixes come up
    /// at audible levels.
    pub shuffle_volume_max: f32,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            default_volume: 0.5,
            shuffle_count: 4,
            shuffle_volume_min: 0.2,
            shuffle_volume_max: 1.0,
        }
    }
}
