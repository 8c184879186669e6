// crates/worldtime-core/src/catalog.rs

//! Built-in time-zone records derived from the compiled zone database.

use crate::raw::TimezoneRecord;
use crate::transition::observes_daylight;
use chrono::{TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

/// One record per zone known to the zone database.
///
/// `short_code` pairs the standard and daylight abbreviations observed in
/// January and July of `reference_year` (`CET/CEST`), or holds a single
/// abbreviation for zones without a seasonal change that year.
pub fn timezone_catalog(reference_year: i32) -> Vec<TimezoneRecord> {
    let (Some(jan), Some(jul)) = (
        Utc.with_ymd_and_hms(reference_year, 1, 1, 12, 0, 0).single(),
        Utc.with_ymd_and_hms(reference_year, 7, 1, 12, 0, 0).single(),
    ) else {
        return Vec::new();
    };

    TZ_VARIANTS
        .iter()
        .map(|tz| TimezoneRecord {
            key: tz.name().to_owned(),
            short_code: short_code(*tz, jan, jul),
            name: tz.name().to_owned(),
        })
        .collect()
}

fn short_code(tz: Tz, jan: chrono::DateTime<Utc>, jul: chrono::DateTime<Utc>) -> String {
    let winter = jan.with_timezone(&tz);
    let summer = jul.with_timezone(&tz);
    let (w, s) = (winter.offset().to_string(), summer.offset().to_string());
    if w == s {
        return w;
    }
    // Southern hemisphere zones observe daylight time in January.
    if observes_daylight(tz, jan) {
        format!("{s}/{w}")
    } else {
        format!("{w}/{s}")
    }
}
