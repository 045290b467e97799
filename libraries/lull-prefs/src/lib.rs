//! Lull - Volume Preference Storage
//!
//! Backends implementing the [`lull_core::VolumeStore`] trait:
//! - [`FileVolumeStore`] - a flat JSON document on disk, the default
//!   for desktop hosts
//! - [`MemoryVolumeStore`] - process-local storage for tests and for
//!   hosts where durable storage is disabled
//!
//! Persistence is best-effort by design: the mixer swallows and logs
//! store failures rather than surfacing them, so a broken or read-only
//! backend degrades to in-memory-only operation.

mod file;
mod memory;

pub use file::FileVolumeStore;
pub use memory::MemoryVolumeStore;
