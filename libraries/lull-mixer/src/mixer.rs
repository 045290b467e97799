//! Mixer - core orchestration
//!
//! Coordinates sound selection, volumes, favorites, shuffle, the
//! one-slot history, and best-effort volume persistence.

use std::collections::HashMap;

use lull_core::{Catalog, VolumeStore};

use crate::{
    events::MixerEvent,
    history::History,
    shuffle,
    types::{MixSnapshot, MixerConfig, SoundState},
};

/// The mixer state machine
///
/// Owns the authoritative in-memory model: one [`SoundState`] per
/// catalog sound, the global transport flag, the advisory lock flag,
/// and the one-slot history. Constructed once per session, seeded from
/// the catalog and the injected [`VolumeStore`].
///
/// All operations are synchronous and total: unknown sound ids are
/// no-ops, and no operation leaves the sound map partially updated.
/// Store failures are logged and swallowed; the in-memory state is
/// never rolled back (best-effort persistence).
///
/// The host drains state-change notifications via
/// [`drain_events`](Mixer::drain_events) after each action.
pub struct Mixer {
    /// Sound ids in catalog order (fixed for the session)
    order: Vec<String>,

    /// Live state, exactly one entry per catalog id
    sounds: HashMap<String, SoundState>,

    /// Global transport flag, independent of selection
    is_playing: bool,

    /// Advisory lock: enforced by callers, never by operations here
    locked: bool,

    /// One-slot snapshot for restore-after-clear
    history: History,

    config: MixerConfig,

    store: Box<dyn VolumeStore>,

    /// Event queue for host synchronization
    pending_events: Vec<MixerEvent>,
}

impl Mixer {
    /// Create a mixer with the default configuration
    pub fn new(catalog: &Catalog, store: Box<dyn VolumeStore>) -> Self {
        Self::with_config(catalog, store, MixerConfig::default())
    }

    /// Create a mixer with a custom configuration
    ///
    /// Seeds one entry per catalog sound: unselected, not a favorite,
    /// volume from the store or `config.default_volume` for ids never
    /// persisted. A failing store reads as empty.
    pub fn with_config(catalog: &Catalog, store: Box<dyn VolumeStore>, config: MixerConfig) -> Self {
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(err) => {
                tracing::warn!(error = %err, "could not load saved volumes, seeding defaults");
                HashMap::new()
            }
        };

        let order: Vec<String> = catalog
            .sound_ids()
            .into_iter()
            .map(ToString::to_string)
            .collect();

        let sounds = order
            .iter()
            .map(|id| {
                let volume = saved.get(id).copied().unwrap_or(config.default_volume);
                (id.clone(), SoundState::with_volume(volume))
            })
            .collect();

        Self {
            order,
            sounds,
            is_playing: false,
            locked: false,
            history: History::new(),
            config,
            store,
            pending_events: Vec::new(),
        }
    }

    // ===== Queries =====

    /// State of one sound, or `None` for ids absent from the catalog
    pub fn sound(&self, id: &str) -> Option<&SoundState> {
        self.sounds.get(id)
    }

    /// Iterate all sounds in catalog order
    pub fn sounds(&self) -> impl Iterator<Item = (&str, &SoundState)> {
        self.order
            .iter()
            .filter_map(|id| self.sounds.get(id).map(|state| (id.as_str(), state)))
    }

    /// All sound ids in catalog order
    pub fn sound_ids(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Ids of currently selected sounds, in catalog order
    pub fn selected(&self) -> Vec<&str> {
        self.sounds()
            .filter(|(_, state)| state.is_selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// Ids of favorite sounds, in catalog order
    pub fn favorites(&self) -> Vec<&str> {
        self.sounds()
            .filter(|(_, state)| state.is_favorite)
            .map(|(id, _)| id)
            .collect()
    }

    /// True iff no sound is selected
    pub fn none_selected(&self) -> bool {
        self.sounds.values().all(|state| !state.is_selected)
    }

    /// Whether the global transport flag is set
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the advisory lock flag is set
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a cleared mix can be restored
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Deep copy of the current sound map
    pub fn snapshot(&self) -> MixSnapshot {
        self.sounds.clone()
    }

    // ===== Selection =====

    /// Add a sound to the active mix
    ///
    /// Any direct selection invalidates the history snapshot: the mix
    /// it captured is no longer the one the user cleared.
    pub fn select(&mut self, id: &str) {
        let Some(sound) = self.sounds.get_mut(id) else {
            return;
        };
        let changed = !sound.is_selected;
        sound.is_selected = true;

        self.history.clear();
        if changed {
            self.pending_events.push(MixerEvent::SelectionChanged {
                id: id.to_string(),
                is_selected: true,
            });
        }
    }

    /// Remove a sound from the active mix
    pub fn unselect(&mut self, id: &str) {
        let Some(sound) = self.sounds.get_mut(id) else {
            return;
        };
        let changed = sound.is_selected;
        sound.is_selected = false;

        if changed {
            self.pending_events.push(MixerEvent::SelectionChanged {
                id: id.to_string(),
                is_selected: false,
            });
        }
    }

    /// Clear the whole mix
    ///
    /// No-op when nothing is selected. Otherwise unselects every sound
    /// and resets every volume to its persisted value (or the default),
    /// then persists. With `push_to_history`, the pre-clear state is
    /// snapshotted first so [`restore_history`](Mixer::restore_history)
    /// can bring it back.
    pub fn unselect_all(&mut self, push_to_history: bool) {
        if self.none_selected() {
            return;
        }

        if push_to_history {
            self.history.put(self.snapshot());
        }

        self.reset_sounds();
        self.persist_volumes();
        self.pending_events.push(MixerEvent::MixCleared {
            restorable: push_to_history,
        });
    }

    /// Restore the mix cleared by the last `unselect_all(true)`
    ///
    /// No-op when no snapshot is stored. Restoring consumes the
    /// snapshot; there is no redo-of-redo.
    pub fn restore_history(&mut self) {
        let Some(snapshot) = self.history.take() else {
            return;
        };

        self.sounds = snapshot;
        self.pending_events.push(MixerEvent::MixRestored);
    }

    // ===== Shuffle =====

    /// Replace the mix with a random one and start playing
    ///
    /// Resets every sound to unselected at its persisted-or-default
    /// volume, then selects up to `config.shuffle_count` distinct
    /// sounds uniformly at random, each at a random volume in the
    /// shuffle range. Persists all volumes and clears the history.
    pub fn shuffle(&mut self) {
        self.reset_sounds();

        let mut rng = rand::thread_rng();
        let pool: Vec<&str> = self.order.iter().map(String::as_str).collect();
        let picked = shuffle::pick_distinct(&pool, self.config.shuffle_count, &mut rng);

        for id in &picked {
            if let Some(sound) = self.sounds.get_mut(id) {
                sound.is_selected = true;
                sound.volume = shuffle::random_volume(
                    self.config.shuffle_volume_min,
                    self.config.shuffle_volume_max,
                    &mut rng,
                );
            }
        }

        self.persist_volumes();
        self.history.clear();
        self.pending_events.push(MixerEvent::Shuffled { ids: picked });
        self.set_playing(true);
    }

    // ===== Favorites =====

    /// Flip a sound's favorite flag
    ///
    /// Never touches selection or volume.
    pub fn toggle_favorite(&mut self, id: &str) {
        let Some(sound) = self.sounds.get_mut(id) else {
            return;
        };
        sound.is_favorite = !sound.is_favorite;
        let is_favorite = sound.is_favorite;

        self.history.clear();
        self.pending_events.push(MixerEvent::FavoriteToggled {
            id: id.to_string(),
            is_favorite,
        });
    }

    // ===== Volume =====

    /// Set a sound's volume and persist immediately
    ///
    /// `volume` must be within [0.0, 1.0]; out-of-range input is a
    /// contract violation the caller must prevent. Does not touch the
    /// history snapshot.
    pub fn set_volume(&mut self, id: &str, volume: f32) {
        let Some(sound) = self.sounds.get_mut(id) else {
            return;
        };
        sound.volume = volume;

        self.persist_volumes();
        self.pending_events.push(MixerEvent::VolumeChanged {
            id: id.to_string(),
            volume,
        });
    }

    /// Replace the mix with an explicit id-to-volume preset
    ///
    /// Clears the current mix (without a history push - a preset load
    /// is deliberate, so the previous mix is not restorable), then
    /// selects every id from the map that exists in the catalog at the
    /// given volume and persists all volumes. Unknown ids are ignored.
    pub fn override_mix(&mut self, volumes: &HashMap<String, f32>) {
        self.unselect_all(false);

        let mut applied = Vec::new();
        for id in &self.order {
            let Some(&volume) = volumes.get(id) else {
                continue;
            };
            if let Some(sound) = self.sounds.get_mut(id) {
                sound.is_selected = true;
                sound.volume = volume;
                applied.push(id.clone());
            }
        }

        self.persist_volumes();
        self.history.clear();
        self.pending_events
            .push(MixerEvent::MixOverridden { ids: applied });
    }

    // ===== Transport =====

    /// Set the transport flag to playing
    pub fn play(&mut self) {
        self.set_playing(true);
    }

    /// Set the transport flag to paused
    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    /// Flip the transport flag
    pub fn toggle_play(&mut self) {
        let next = !self.is_playing;
        self.set_playing(next);
    }

    // ===== Lock =====

    /// Set the advisory lock flag
    pub fn lock(&mut self) {
        self.set_locked(true);
    }

    /// Clear the advisory lock flag
    pub fn unlock(&mut self) {
        self.set_locked(false);
    }

    // ===== Events =====

    /// Drain all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<MixerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether any events are queued
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Unselect every sound and reset its volume to persisted-or-default
    fn reset_sounds(&mut self) {
        let saved = match self.store.load() {
            Ok(saved) => saved,
            Err(err) => {
                tracing::warn!(error = %err, "could not load saved volumes, resetting to defaults");
                HashMap::new()
            }
        };

        for id in &self.order {
            if let Some(sound) = self.sounds.get_mut(id) {
                sound.is_selected = false;
                sound.volume = saved.get(id).copied().unwrap_or(self.config.default_volume);
            }
        }
    }

    /// Write all current volumes through the store, best-effort
    fn persist_volumes(&self) {
        let volumes: HashMap<String, f32> = self
            .sounds
            .iter()
            .map(|(id, state)| (id.clone(), state.volume))
            .collect();

        if let Err(err) = self.store.save(&volumes) {
            tracing::warn!(error = %err, "could not save volumes, continuing in-memory");
        }
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing == is_playing {
            return;
        }
        self.is_playing = is_playing;
        self.pending_events
            .push(MixerEvent::PlayStateChanged { is_playing });
    }

    fn set_locked(&mut self, locked: bool) {
        if self.locked == locked {
            return;
        }
        self.locked = locked;
        self.pending_events.push(MixerEvent::LockChanged { locked });
    }
}

impl std::fmt::Debug for Mixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mixer")
            .field("sounds", &self.sounds.len())
            .field("selected", &self.selected().len())
            .field("is_playing", &self.is_playing)
            .field("locked", &self.locked)
            .field("has_history", &self.has_history())
            .finish_non_exhaustive()
    }
}
