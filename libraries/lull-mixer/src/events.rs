//! Mixer events
//!
//! Event-based communication for host synchronization. The mixer
//! queues an event for every state change; hosts drain the queue after
//! each action and update playback adapters and UI from it.

use serde::{Deserialize, Serialize};

/// Events emitted by the mixer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MixerEvent {
    /// A sound was selected or unselected
    SelectionChanged {
        /// Sound id
        id: String,
        /// New selection state
        is_selected: bool,
    },

    /// A sound's volume changed
    VolumeChanged {
        /// Sound id
        id: String,
        /// New volume in [0.0, 1.0]
        volume: f32,
    },

    /// A sound's favorite flag flipped
    FavoriteToggled {
        /// Sound id
        id: String,
        /// New favorite state
        is_favorite: bool,
    },

    /// Global transport flag changed
    PlayStateChanged {
        /// Whether the mixer is now playing
        is_playing: bool,
    },

    /// Advisory lock flag changed
    LockChanged {
        /// Whether mutation gestures should be suppressed
        locked: bool,
    },

    /// The whole mix was cleared
    MixCleared {
        /// Whether a history snapshot was taken and restore is possible
        restorable: bool,
    },

    /// A previously cleared mix was restored from history
    MixRestored,

    /// A shuffle replaced the mix
    Shuffled {
        /// Ids selected by the shuffle
        ids: Vec<String>,
    },

    /// A preset load replaced the mix
    MixOverridden {
        /// Ids selected by the override
        ids: Vec<String>,
    },
}
