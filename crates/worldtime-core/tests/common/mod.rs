#![allow(dead_code)]

use worldtime_core::{
    CityRecord, CountryRecord, DirectorySnapshot, EntityIndex, TimezoneRecord,
};

fn country(code: &str, name: &str, capital: &str) -> CountryRecord {
    CountryRecord {
        code: code.into(),
        name: name.into(),
        capital: capital.into(),
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

fn timezone(key: &str, short_code: &str) -> TimezoneRecord {
    TimezoneRecord {
        key: key.into(),
        short_code: short_code.into(),
        name: key.into(),
    }
}

pub fn snapshot() -> DirectorySnapshot {
    DirectorySnapshot {
        countries: vec![
            country("FR", "France", "Paris"),
            country("US", "United States", "Washington"),
            country("GB", "United Kingdom", "London"),
            country("NZ", "New Zealand", "Wellington"),
            country("IN", "India", "New Delhi"),
            country("JP", "Japan", "Tokyo"),
            country("ID", "Indonesia", "Jakarta"),
        ],
        cities: vec![
            city("FR", "Paris", None, "Europe/Paris", 2_138_551),
            city("US", "Paris", Some("TX"), "America/Chicago", 25_171),
            city("US", "New York", Some("NY"), "America/New_York", 8_175_133),
            city("GB", "York", None, "Europe/London", 153_717),
            city("GB", "Yorkville", None, "Europe/London", 900_000),
            city("GB", "Newcastle upon Tyne", None, "Europe/London", 192_382),
            city("GB", "London", None, "Europe/London", 7_556_900),
            city("NZ", "Auckland", None, "Pacific/Auckland", 417_910),
            city("IN", "New Delhi", None, "Asia/Kolkata", 317_797),
            city("JP", "Tokyo", None, "Asia/Tokyo", 8_336_599),
            city("ID", "Jakarta", None, "Asia/Jakarta", 8_540_121),
            // Duplicate key: the smaller record must be discarded.
            city("GB", "London", None, "Europe/London", 7_000),
        ],
        timezones: vec![
            timezone("Europe/Paris", "CET/CEST"),
            timezone("America/New_York", "EST/EDT"),
            timezone("Asia/Kolkata", "IST"),
            timezone("Japan", "JST"),
        ],
    }
}

pub fn index() -> EntityIndex {
    EntityIndex::build(snapshot()).expect("fixture snapshot is valid")
}
