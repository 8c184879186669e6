// crates/worldtime-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the directory.
///
/// Returned by [`crate::EntityIndex::stats`]; counts reflect the index
/// after duplicate city keys have been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub countries: usize,
    pub cities: usize,
    pub timezones: usize,
}
