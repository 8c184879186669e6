// crates/worldtime-core/src/raw.rs

//! Directory snapshot records as produced by the offline ETL.
//!
//! These mirror the external data shape. All derived search fields are
//! computed by [`crate::index::EntityIndex`], never read from the snapshot.

use serde::{Deserialize, Serialize};

/// Raw country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub capital: String,
}

/// Raw city record.
///
/// The ETL historically emitted `country` and `timezone`; both spellings
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    #[serde(alias = "country")]
    pub country_code: String,
    #[serde(default)]
    pub state: Option<String>,
    pub name: String,
    /// Defaults to `name (state)` / `name` when absent.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(alias = "timezone")]
    pub timezone_id: String,
    #[serde(default)]
    pub population: u64,
}

/// Raw time-zone record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneRecord {
    pub key: String,
    pub short_code: String,
    pub name: String,
}

/// The read-only input assembled once at process start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub countries: Vec<CountryRecord>,
    #[serde(default)]
    pub cities: Vec<CityRecord>,
    #[serde(default)]
    pub timezones: Vec<TimezoneRecord>,
}

impl CityRecord {
    /// Display name, deriving `name (state)` when the record has none.
    pub fn display_name(&self) -> String {
        match (&self.display_name, &self.state) {
            (Some(d), _) => d.clone(),
            (None, Some(state)) => format!("{} ({})", self.name, state),
            (None, None) => self.name.clone(),
        }
    }
}

impl DirectorySnapshot {
    /// Append the built-in time-zone catalog for every zone key that the
    /// snapshot does not already list.
    pub fn with_builtin_timezones(mut self, reference_year: i32) -> Self {
        let known: std::collections::HashSet<String> =
            self.timezones.iter().map(|t| t.key.clone()).collect();
        self.timezones.extend(
            crate::catalog::timezone_catalog(reference_year)
                .into_iter()
                .filter(|t| !known.contains(&t.key)),
        );
        self
    }
}
