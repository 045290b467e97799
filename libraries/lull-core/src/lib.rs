//! Lull - Core Types
//!
//! Shared foundation for the Lull ambient sound mixer.
//!
//! This crate provides:
//! - The sound catalog (categories and sound descriptors)
//! - The `VolumeStore` capability trait for volume persistence
//! - The shared error type
//!
//! `lull-core` is completely platform-agnostic: no I/O beyond what a
//! `VolumeStore` implementation chooses to do, no audio dependencies.
//! Storage backends are provided by `lull-prefs`; the mixer state
//! machine lives in `lull-mixer`.

mod catalog;
mod error;
mod store;

// Public exports
pub use catalog::{Catalog, Category, SoundMeta};
pub use error::{CoreError, Result};
pub use store::VolumeStore;
