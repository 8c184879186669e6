// crates/worldtime-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading a directory snapshot or serving an
/// engine operation.
///
/// Absence of a search match is never an error: the search operations
/// return `None` or an empty list instead.
#[derive(Debug, Error)]
pub enum WorldTimeError {
    /// An away/home key does not resolve to any entity, or the entity
    /// names a zone that the time-zone database does not know.
    #[error("zone not found: {0}")]
    ZoneNotFound(String),

    /// The requested calendar day does not exist.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A city references a country code missing from the snapshot.
    #[error("city {city} references unknown country {country}")]
    UnknownCountry { city: String, country: String },

    /// The snapshot file could not be opened.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "cache")]
    #[error("cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, WorldTimeError>;
