// crates/worldtime-core/src/model.rs
use crate::traits::SearchKeys;
use serde::{Deserialize, Serialize};

/// A country entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub capital: String,
}

/// A city with its derived search fields.
///
/// `key` is `country/name[/state]` with spaces normalized and is unique
/// across the directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub key: String,
    pub country_code: String,
    pub country_name: String,
    pub state: Option<String>,
    pub name: String,
    pub display_name: String,
    /// `display_name, country name`
    pub full_display_name: String,
    /// Lowercase `full_display_name`, the exact-match target.
    pub search_name: String,
    /// Lowercase tokens of `display_name`.
    pub primary_words: Vec<String>,
    /// `primary_words` followed by the country name tokens.
    pub secondary_words: Vec<String>,
    pub timezone_id: String,
    pub population: u64,
}

/// A time-zone entry with its derived search fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneEntry {
    /// Canonical zone identifier (`Europe/Paris`).
    pub key: String,
    /// `STD/DST` abbreviation pair, or a single abbreviation.
    pub short_code: String,
    pub name: String,
    /// `name (short_code)`
    pub full_display_name: String,
    pub search_name: String,
    pub words: Vec<String>,
}

/// Discriminant of a [`Zone`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    City,
    Timezone,
}

/// Either a city or a time-zone entry.
///
/// Both search and scheduling work on this uniform type; use
/// [`Zone::view`] for the serializable projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    City(City),
    Timezone(TimezoneEntry),
}

/// Uniform read projection of a [`Zone`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZoneView<'a> {
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    pub key: &'a str,
    #[serde(rename = "timezone")]
    pub timezone_id: &'a str,
    #[serde(rename = "name")]
    pub display_name: &'a str,
    #[serde(rename = "full_name")]
    pub full_display_name: &'a str,
    #[serde(rename = "country")]
    pub country_name: Option<&'a str>,
    pub tz_short: Option<&'a str>,
    pub population: u64,
}

impl Zone {
    pub fn kind(&self) -> ZoneKind {
        match self {
            Zone::City(_) => ZoneKind::City,
            Zone::Timezone(_) => ZoneKind::Timezone,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Zone::City(c) => &c.key,
            Zone::Timezone(t) => &t.key,
        }
    }

    /// Zone database identifier used for all time arithmetic.
    pub fn timezone_id(&self) -> &str {
        match self {
            Zone::City(c) => &c.timezone_id,
            Zone::Timezone(t) => &t.key,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Zone::City(c) => &c.display_name,
            Zone::Timezone(t) => &t.name,
        }
    }

    pub fn full_display_name(&self) -> &str {
        match self {
            Zone::City(c) => &c.full_display_name,
            Zone::Timezone(t) => &t.full_display_name,
        }
    }

    pub fn country_name(&self) -> Option<&str> {
        match self {
            Zone::City(c) => Some(&c.country_name),
            Zone::Timezone(_) => None,
        }
    }

    pub fn tz_short(&self) -> Option<&str> {
        match self {
            Zone::City(_) => None,
            Zone::Timezone(t) => Some(&t.short_code),
        }
    }

    /// Population for cities, `0` for time-zone entries.
    pub fn population(&self) -> u64 {
        match self {
            Zone::City(c) => c.population,
            Zone::Timezone(_) => 0,
        }
    }

    #[inline]
    pub fn is_timezone(&self) -> bool {
        matches!(self, Zone::Timezone(_))
    }

    pub fn view(&self) -> ZoneView<'_> {
        ZoneView {
            kind: self.kind(),
            key: self.key(),
            timezone_id: self.timezone_id(),
            display_name: self.display_name(),
            full_display_name: self.full_display_name(),
            country_name: self.country_name(),
            tz_short: self.tz_short(),
            population: self.population(),
        }
    }
}

impl SearchKeys for City {
    fn search_name(&self) -> &str {
        &self.search_name
    }

    fn primary_words(&self) -> &[String] {
        &self.primary_words
    }

    fn secondary_words(&self) -> Option<&[String]> {
        Some(&self.secondary_words)
    }
}

impl SearchKeys for TimezoneEntry {
    fn search_name(&self) -> &str {
        &self.search_name
    }

    fn primary_words(&self) -> &[String] {
        &self.words
    }

    fn is_exact(&self, q: &str) -> bool {
        self.search_name == q || self.key.to_lowercase() == q
    }
}

impl SearchKeys for Zone {
    fn search_name(&self) -> &str {
        match self {
            Zone::City(c) => c.search_name(),
            Zone::Timezone(t) => t.search_name(),
        }
    }

    fn primary_words(&self) -> &[String] {
        match self {
            Zone::City(c) => c.primary_words(),
            Zone::Timezone(t) => t.primary_words(),
        }
    }

    fn secondary_words(&self) -> Option<&[String]> {
        match self {
            Zone::City(c) => c.secondary_words(),
            Zone::Timezone(t) => t.secondary_words(),
        }
    }

    fn is_exact(&self, q: &str) -> bool {
        match self {
            Zone::City(c) => c.is_exact(q),
            Zone::Timezone(t) => t.is_exact(q),
        }
    }
}
