//! The sound catalog: categories of ambient sounds
//!
//! The catalog is static, read-only data loaded once at startup. It
//! defines which sounds exist; the mixer keeps exactly one state entry
//! per catalog id. Categories are a display grouping only and carry no
//! mixer semantics beyond fixing the canonical sound order.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Descriptor for a single ambient sound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundMeta {
    /// Stable identifier, unique across the whole catalog (e.g. "rain")
    pub id: String,

    /// Human-readable name for display
    pub label: String,

    /// Path to the audio asset, consumed by playback adapters
    pub src: String,
}

/// A named grouping of sounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable category identifier (e.g. "nature")
    pub id: String,

    /// Human-readable name for display
    pub label: String,

    /// Sounds in this category, in display order
    pub sounds: Vec<SoundMeta>,
}

/// The full sound catalog
///
/// Sound order is significant: "catalog order" (category order, then
/// sound order within each category) is the canonical ordering used by
/// every ordered query on the mixer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Categories in display order
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from categories, validating id uniqueness
    ///
    /// # Errors
    /// Returns `CoreError::DuplicateSound` if any sound id appears twice
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let catalog = Self { categories };
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    ///
    /// # Errors
    /// Returns an error on malformed JSON or duplicate sound ids
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON reader
    ///
    /// # Errors
    /// Returns an error on read failure, malformed JSON, or duplicate sound ids
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    /// All sound ids in catalog order
    pub fn sound_ids(&self) -> Vec<&str> {
        self.sounds().map(|sound| sound.id.as_str()).collect()
    }

    /// Iterate all sounds in catalog order
    pub fn sounds(&self) -> impl Iterator<Item = &SoundMeta> {
        self.categories
            .iter()
            .flat_map(|category| category.sounds.iter())
    }

    /// Look up a sound descriptor by id
    pub fn sound(&self, id: &str) -> Option<&SoundMeta> {
        self.sounds().find(|sound| sound.id == id)
    }

    /// Whether the catalog contains the given sound id
    pub fn contains(&self, id: &str) -> bool {
        self.sound(id).is_some()
    }

    /// Total number of sounds across all categories
    pub fn len(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.sounds.len())
            .sum()
    }

    /// Whether the catalog has no sounds
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for sound in self.sounds() {
            if !seen.insert(sound.id.as_str()) {
                return Err(CoreError::DuplicateSound(sound.id.clone()));
            }
        }
        Ok(())
    }

    /// The stock ambient catalog shipped with Lull
    pub fn builtin() -> Self {
        fn sound(category: &str, id: &str, label: &str) -> SoundMeta {
            SoundMeta {
                id: id.to_string(),
                label: label.to_string(),
                src: format!("/sounds/{category}/{id}.mp3"),
            }
        }

        fn category(id: &str, label: &str, sounds: Vec<SoundMeta>) -> Category {
            Category {
                id: id.to_string(),
                label: label.to_string(),
                sounds,
            }
        }

        Self {
            categories: vec![
                category(
                    "nature",
                    "Nature",
                    vec![
                        sound("nature", "rain", "Rain"),
                        sound("nature", "thunder", "Thunder"),
                        sound("nature", "wind", "Wind"),
                        sound("nature", "waves", "Waves"),
                        sound("nature", "stream", "Stream"),
                        sound("nature", "waterfall", "Waterfall"),
                        sound("nature", "campfire", "Campfire"),
                    ],
                ),
                category(
                    "animals",
                    "Animals",
                    vec![
                        sound("animals", "birds", "Birds"),
                        sound("animals", "crickets", "Crickets"),
                        sound("animals", "frogs", "Frogs"),
                        sound("animals", "owl", "Owl"),
                    ],
                ),
                category(
                    "urban",
                    "Urban",
                    vec![
                        sound("urban", "cafe", "Cafe"),
                        sound("urban", "crowd", "Crowd"),
                        sound("urban", "traffic", "Traffic"),
                        sound("urban", "fireworks", "Fireworks"),
                    ],
                ),
                category(
                    "transport",
                    "Transport",
                    vec![
                        sound("transport", "train", "Train"),
                        sound("transport", "airplane", "Airplane"),
                        sound("transport", "sailboat", "Sailboat"),
                    ],
                ),
                category(
                    "things",
                    "Things",
                    vec![
                        sound("things", "keyboard", "Keyboard"),
                        sound("things", "clock", "Clock"),
                        sound("things", "wind-chimes", "Wind Chimes"),
                        sound("things", "ceiling-fan", "Ceiling Fan"),
                    ],
                ),
                category(
                    "noise",
                    "Noise",
                    vec![
                        sound("noise", "white-noise", "White Noise"),
                        sound("noise", "pink-noise", "Pink Noise"),
                        sound("noise", "brown-noise", "Brown Noise"),
                    ],
                ),
            ],
        }
    }
}
