// crates/worldtime-core/src/index.rs

//! # Entity Index
//!
//! Turns a [`DirectorySnapshot`] into immutable [`Zone`] entities with
//! their derived search keys. Built once, then shared read-only.

use crate::common::DirectoryStats;
use crate::error::{Result, WorldTimeError};
use crate::model::{City, Country, TimezoneEntry, Zone};
use crate::raw::{CityRecord, DirectorySnapshot, TimezoneRecord};
use crate::text::{city_key, lower_words, zone_words};
use std::collections::HashMap;
use tracing::{debug, info};

/// Immutable mapping from entity key to [`Zone`].
///
/// Entities live in one contiguous vector sorted by key; `by_key` maps a
/// key to its slot. Iteration order is therefore stable for a given
/// snapshot.
#[derive(Clone, Debug)]
pub struct EntityIndex {
    countries: HashMap<String, Country>,
    zones: Vec<Zone>,
    by_key: HashMap<String, usize>,
}

impl EntityIndex {
    /// Build the index from a snapshot.
    ///
    /// Fails only with [`WorldTimeError::UnknownCountry`] when a city
    /// references a country code the snapshot does not contain.
    pub fn build(snapshot: DirectorySnapshot) -> Result<Self> {
        let countries: HashMap<String, Country> = snapshot
            .countries
            .into_iter()
            .map(|c| {
                (
                    c.code.clone(),
                    Country {
                        code: c.code,
                        name: c.name,
                        capital: c.capital,
                    },
                )
            })
            .collect();

        // Higher population wins on colliding keys; ties go to the later record.
        let mut cities: HashMap<String, CityRecord> = HashMap::with_capacity(snapshot.cities.len());
        for record in snapshot.cities {
            let key = city_key(&record.country_code, &record.name, record.state.as_deref());
            match cities.get(&key) {
                Some(old) if record.population < old.population => {
                    debug!(%key, population = record.population, "discarding smaller duplicate city");
                }
                Some(old) => {
                    debug!(%key, population = old.population, "replacing smaller duplicate city");
                    cities.insert(key, record);
                }
                None => {
                    cities.insert(key, record);
                }
            }
        }

        let mut zones = Vec::with_capacity(cities.len() + snapshot.timezones.len());
        for (key, record) in cities {
            let country = countries.get(&record.country_code).ok_or_else(|| {
                WorldTimeError::UnknownCountry {
                    city: key.clone(),
                    country: record.country_code.clone(),
                }
            })?;
            zones.push(Zone::City(derive_city(key, record, country)));
        }
        zones.extend(snapshot.timezones.into_iter().map(|t| Zone::Timezone(derive_timezone(t))));
        zones.sort_by(|a, b| a.key().cmp(b.key()));

        let by_key = zones
            .iter()
            .enumerate()
            .map(|(i, z)| (z.key().to_owned(), i))
            .collect::<HashMap<_, _>>();
        if by_key.len() != zones.len() {
            debug!(
                entities = zones.len(),
                keys = by_key.len(),
                "city and timezone keys overlap; lookups resolve to the later entity"
            );
        }

        let index = EntityIndex {
            countries,
            zones,
            by_key,
        };
        let stats = index.stats();
        info!(
            countries = stats.countries,
            cities = stats.cities,
            timezones = stats.timezones,
            "entity index built"
        );
        Ok(index)
    }

    /// Resolve a zone by its unique key.
    pub fn lookup_by_key(&self, key: &str) -> Option<&Zone> {
        self.by_key.get(key).map(|&i| &self.zones[i])
    }

    /// All entities in key order.
    pub fn all_entities(&self) -> &[Zone] {
        &self.zones
    }

    pub fn stats(&self) -> DirectoryStats {
        let timezones = self.zones.iter().filter(|z| z.is_timezone()).count();
        DirectoryStats {
            countries: self.countries.len(),
            cities: self.zones.len() - timezones,
            timezones,
        }
    }
}

fn derive_city(key: String, record: CityRecord, country: &Country) -> City {
    let display_name = record.display_name();
    let full_display_name = format!("{}, {}", display_name, country.name);
    let search_name = full_display_name.to_lowercase();
    let primary_words = lower_words(&display_name);
    let mut secondary_words = primary_words.clone();
    secondary_words.extend(lower_words(&country.name));

    City {
        key,
        country_code: record.country_code,
        country_name: country.name.clone(),
        state: record.state,
        name: record.name,
        display_name,
        full_display_name,
        search_name,
        primary_words,
        secondary_words,
        timezone_id: record.timezone_id,
        population: record.population,
    }
}

fn derive_timezone(record: TimezoneRecord) -> TimezoneEntry {
    let full_display_name = format!("{} ({})", record.name, record.short_code);
    let search_name = full_display_name.to_lowercase();
    let mut words = zone_words(&record.name);
    words.extend(zone_words(&record.short_code));

    TimezoneEntry {
        key: record.key,
        short_code: record.short_code,
        name: record.name,
        full_display_name,
        search_name,
        words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::CountryRecord;

    fn country(code: &str, name: &str) -> CountryRecord {
        CountryRecord {
            code: code.into(),
            name: name.into(),
            capital: String::new(),
        }
    }

    fn city(cc: &str, name: &str, state: Option<&str>, tz: &str, population: u64) -> CityRecord {
        CityRecord {
            country_code: cc.into(),
            state: state.map(Into::into),
            name: name.into(),
            display_name: None,
            timezone_id: tz.into(),
            population,
        }
    }

    #[test]
    fn derives_city_fields() {
        let snap = DirectorySnapshot {
            countries: vec![country("US", "United States")],
            cities: vec![city("US", "New York", Some("NY"), "America/New_York", 8_000_000)],
            timezones: vec![],
        };
        let index = EntityIndex::build(snap).unwrap();
        let Some(Zone::City(c)) = index.lookup_by_key("US/New_York/NY") else {
            panic!("city missing");
        };
        assert_eq!(c.display_name, "New York (NY)");
        assert_eq!(c.full_display_name, "New York (NY), United States");
        assert_eq!(c.search_name, "new york (ny), united states");
        assert_eq!(c.primary_words, vec!["new", "york", "(ny)"]);
        assert_eq!(
            c.secondary_words,
            vec!["new", "york", "(ny)", "united", "states"]
        );
    }

    #[test]
    fn derives_timezone_fields() {
        let snap = DirectorySnapshot {
            timezones: vec![TimezoneRecord {
                key: "Europe/Berlin".into(),
                short_code: "CET/CEST".into(),
                name: "Europe/Berlin".into(),
            }],
            ..Default::default()
        };
        let index = EntityIndex::build(snap).unwrap();
        let Some(Zone::Timezone(t)) = index.lookup_by_key("Europe/Berlin") else {
            panic!("timezone missing");
        };
        assert_eq!(t.full_display_name, "Europe/Berlin (CET/CEST)");
        assert_eq!(t.search_name, "europe/berlin (cet/cest)");
        assert_eq!(t.words, vec!["europe", "berlin", "cet", "cest"]);
    }

    #[test]
    fn unknown_country_is_fatal() {
        let snap = DirectorySnapshot {
            countries: vec![country("FR", "France")],
            cities: vec![city("XX", "Nowhere", None, "UTC", 1)],
            timezones: vec![],
        };
        let err = EntityIndex::build(snap).unwrap_err();
        assert!(matches!(err, WorldTimeError::UnknownCountry { ref country, .. } if country == "XX"));
    }

    #[test]
    fn duplicate_city_keeps_larger_population() {
        let snap = DirectorySnapshot {
            countries: vec![country("DE", "Germany")],
            cities: vec![
                city("DE", "Frankfurt", None, "Europe/Berlin", 700_000),
                city("DE", "Frankfurt", None, "Europe/Berlin", 60_000),
            ],
            timezones: vec![],
        };
        let index = EntityIndex::build(snap).unwrap();
        assert_eq!(index.stats().cities, 1);
        assert_eq!(
            index.lookup_by_key("DE/Frankfurt").map(Zone::population),
            Some(700_000)
        );
    }

    #[test]
    fn entities_are_sorted_by_key() {
        let snap = DirectorySnapshot {
            countries: vec![country("FR", "France"), country("AT", "Austria")],
            cities: vec![
                city("FR", "Paris", None, "Europe/Paris", 2_000_000),
                city("AT", "Vienna", None, "Europe/Vienna", 1_700_000),
            ],
            timezones: vec![],
        };
        let index = EntityIndex::build(snap).unwrap();
        let keys: Vec<&str> = index.all_entities().iter().map(Zone::key).collect();
        assert_eq!(keys, vec!["AT/Vienna", "FR/Paris"]);
        assert_eq!(index.stats().countries, 2);
    }
}
