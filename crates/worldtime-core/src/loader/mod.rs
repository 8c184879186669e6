// crates/worldtime-core/src/loader/mod.rs

//! # Snapshot Loader
//!
//! Handles the physical layer (I/O, decompression, binary cache) and hands
//! a [`DirectorySnapshot`] to [`EntityIndex::build`].

use crate::error::{Result, WorldTimeError};
use crate::index::EntityIndex;
use crate::raw::DirectorySnapshot;
use chrono::{Datelike, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[cfg(feature = "cache")]
mod cache;
mod common_io;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".cache.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".comp.cache.bin";

/// Options controlling how a snapshot file is turned into an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reuse (and refresh) the binary cache next to the snapshot file.
    pub use_cache: bool,
    /// Add the built-in time-zone catalog for zones the snapshot omits.
    pub builtin_timezones: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            use_cache: true,
            builtin_timezones: false,
        }
    }
}

impl DirectorySnapshot {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_snapshot_filename() -> &'static str {
        if cfg!(feature = "compact") {
            "snapshot.json.gz"
        } else {
            "snapshot.json"
        }
    }

    /// Read a snapshot file, preferring a fresh binary cache when enabled.
    pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();

        #[cfg(feature = "cache")]
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        #[cfg(feature = "cache")]
        if options.use_cache && cache::is_cache_fresh(path, &cache_path) {
            match cache::read_cache(&cache_path) {
                Ok(snapshot) => {
                    debug!(path = %cache_path.display(), "using snapshot cache");
                    return Ok(snapshot);
                }
                Err(e) => warn!(path = %cache_path.display(), error = %e, "ignoring unreadable cache"),
            }
        }

        let snapshot = Self::read_source(path)?;
        info!(
            path = %path.display(),
            countries = snapshot.countries.len(),
            cities = snapshot.cities.len(),
            timezones = snapshot.timezones.len(),
            "snapshot loaded"
        );

        #[cfg(feature = "cache")]
        if options.use_cache {
            // Best effort: a read-only data dir must not fail the load.
            if let Err(e) = cache::write_cache(&cache_path, &snapshot) {
                warn!(path = %cache_path.display(), error = %e, "could not write cache");
            }
        }
        #[cfg(not(feature = "cache"))]
        let _ = options;

        Ok(snapshot)
    }

    #[cfg(feature = "json")]
    fn read_source(path: &Path) -> Result<Self> {
        let reader = common_io::open_stream(path)?;
        Ok(serde_json::from_reader(reader)?)
    }

    #[cfg(not(feature = "json"))]
    fn read_source(path: &Path) -> Result<Self> {
        Err(WorldTimeError::InvalidData(format!(
            "cannot read {}: built without the 'json' feature",
            path.display()
        )))
    }
}

impl EntityIndex {
    /// Load a snapshot file and build the index from it.
    pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let mut snapshot = DirectorySnapshot::load_from_path(path, options)?;
        if options.builtin_timezones {
            snapshot = snapshot.with_builtin_timezones(Utc::now().year());
        }
        if snapshot.cities.is_empty() && snapshot.timezones.is_empty() {
            return Err(WorldTimeError::InvalidData(
                "snapshot contains no cities and no timezones".into(),
            ));
        }
        Self::build(snapshot)
    }
}
