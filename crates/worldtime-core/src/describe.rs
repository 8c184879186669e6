// crates/worldtime-core/src/describe.rs

//! Short human-readable descriptions of schedule data.

use crate::schedule::{OffsetSummary, ZoneAbbrev};
use crate::transition::TransitionInfo;

/// Signed hour count of an offset in seconds (`+5.5`, `-3`, `0`).
///
/// ```rust
/// use worldtime_core::describe::format_hours;
///
/// assert_eq!(format_hours(19_800), "+5.5");
/// assert_eq!(format_hours(-10_800), "-3");
/// assert_eq!(format_hours(0), "0");
/// ```
pub fn format_hours(seconds: i64) -> String {
    let sign = if seconds > 0 { "+" } else { "" };
    if seconds % 3600 == 0 {
        format!("{sign}{}", seconds / 3600)
    } else {
        format!("{sign}{}", seconds as f64 / 3600.0)
    }
}

/// `UTC +2 hours (DST observed)`
pub fn describe_zone_abbrev(zone: &ZoneAbbrev) -> String {
    let mut rv = String::from("UTC");
    if zone.offset != 0 {
        rv.push(' ');
        rv.push_str(&format_hours(zone.offset.into()));
        rv.push_str(" hours");
    }
    if zone.is_dst {
        rv.push_str(" (DST observed)");
    }
    rv
}

/// `Your home` or `+6 hours from home`, based on the median offset.
pub fn describe_offset(offsets: &OffsetSummary) -> String {
    match offsets.median {
        0 => "Your home".to_owned(),
        m => format!("{} hours from home", format_hours(m)),
    }
}

/// `CET to CEST (+1 hour) on Sun, 31 Mar 2024 01:00:00 UTC`
pub fn describe_transition(ti: &TransitionInfo) -> String {
    let delta = i64::from(ti.to_offset) - i64::from(ti.from_offset);
    let unit = if delta.abs() == 3600 { "hour" } else { "hours" };
    format!(
        "{} to {} ({} {}) on {}",
        ti.from_abbrev,
        ti.to_abbrev,
        format_hours(delta),
        unit,
        ti.activates_at.format("%a, %d %b %Y %H:%M:%S UTC")
    )
}
