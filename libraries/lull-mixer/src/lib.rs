//! Lull - Mixer State Machine
//!
//! The authoritative in-memory model of the ambient sound mix.
//!
//! This crate provides:
//! - Per-sound selection, volume, and favorite state
//! - A global transport flag and an advisory lock flag
//! - Shuffle (up to 4 distinct sounds at randomized volumes)
//! - One-slot history: clear the mix, then restore it once
//! - Best-effort volume persistence through an injected store
//! - An event queue for host synchronization
//!
//! # Architecture
//!
//! `lull-mixer` is completely platform-agnostic: no audio or storage
//! dependencies. The catalog and the [`VolumeStore`](lull_core::VolumeStore)
//! capability come from `lull-core`; concrete storage backends live in
//! `lull-prefs`. Playback adapters consume
//! [`snapshot`](Mixer::snapshot) / [`drain_events`](Mixer::drain_events)
//! and drive the transport methods - they never mutate sound state
//! directly.
//!
//! # Example: Building a mix
//!
//! ```rust
//! use lull_core::Catalog;
//! use lull_mixer::Mixer;
//! use lull_prefs::MemoryVolumeStore;
//!
//! let catalog = Catalog::builtin();
//! let mut mixer = Mixer::new(&catalog, Box::new(MemoryVolumeStore::new()));
//!
//! mixer.select("rain");
//! mixer.set_volume("rain", 0.3);
//! mixer.play();
//!
//! assert_eq!(mixer.selected(), vec!["rain"]);
//! assert!(mixer.is_playing());
//! ```
//!
//! # Example: Clear and restore
//!
//! ```rust
//! use lull_core::Catalog;
//! use lull_mixer::Mixer;
//! use lull_prefs::MemoryVolumeStore;
//!
//! let catalog = Catalog::builtin();
//! let mut mixer = Mixer::new(&catalog, Box::new(MemoryVolumeStore::new()));
//!
//! mixer.select("rain");
//! mixer.select("birds");
//!
//! // Clear with a history push, then bring the mix back
//! mixer.unselect_all(true);
//! assert!(mixer.none_selected());
//!
//! mixer.restore_history();
//! assert_eq!(mixer.selected(), vec!["rain", "birds"]);
//! ```

mod events;
mod history;
mod mixer;
mod shuffle;
pub mod types;

// Public exports
pub use events::MixerEvent;
pub use mixer::Mixer;
pub use types::{MixSnapshot, MixerConfig, SoundState};
