// crates/worldtime-core/src/transition.rs

//! # Transition Resolver
//!
//! Finds the next UTC-offset change of a zone by probing the zone
//! database forward from a reference instant and bisecting to the second.

use crate::error::{Result, WorldTimeError};
use chrono::{DateTime, Duration, Offset, Utc};
use chrono_tz::{OffsetComponents, Tz};
use serde::Serialize;

/// How far ahead a transition is searched for.
const HORIZON_DAYS: i64 = 2 * 366;
/// Probe step; a zone is assumed not to change twice within it.
const PROBE_STEP_SECS: i64 = 24 * 3600;
const SOON_SECS: i64 = 7 * 24 * 3600;
const HALF_YEAR_DAYS: i64 = 183;

/// The next scheduled offset change of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionInfo {
    #[serde(rename = "activates")]
    pub activates_at: DateTime<Utc>,
    pub from_offset: i32,
    pub to_offset: i32,
    #[serde(rename = "from_tz")]
    pub from_abbrev: String,
    #[serde(rename = "to_tz")]
    pub to_abbrev: String,
    /// Activates less than seven days after the reference instant.
    pub is_soon: bool,
}

/// Real-time clock state of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockInfo {
    pub offset: i32,
    pub next_offset: Option<i32>,
    pub activates: Option<DateTime<Utc>>,
}

/// Resolve a zone database identifier.
pub fn parse_zone(id: &str) -> Result<Tz> {
    id.parse::<Tz>()
        .map_err(|_| WorldTimeError::ZoneNotFound(id.to_owned()))
}

/// UTC offset in seconds and abbreviation of `tz` at `at`.
pub fn zone_state(tz: Tz, at: DateTime<Utc>) -> (i32, String) {
    let local = at.with_timezone(&tz);
    let offset = local.offset();
    (offset.fix().local_minus_utc(), offset.to_string())
}

/// Whether `tz` is on its daylight (summer) time at `at`.
///
/// Zones such as `Europe/Dublin` encode winter time as a negative DST
/// offset and summer time as their standard offset. For those, a zero DST
/// offset counts as daylight when the opposite season is negative.
pub fn observes_daylight(tz: Tz, at: DateTime<Utc>) -> bool {
    let dst = at.with_timezone(&tz).offset().dst_offset().num_seconds();
    if dst != 0 {
        return dst > 0;
    }
    let opposite = at + Duration::days(HALF_YEAR_DAYS);
    opposite.with_timezone(&tz).offset().dst_offset().num_seconds() < 0
}

/// Next strictly-future offset or abbreviation change of `tz` after
/// `reference`, or `None` for zones without one in the search horizon.
pub fn next_transition(tz: Tz, reference: DateTime<Utc>) -> Option<TransitionInfo> {
    let from = zone_state(tz, reference);
    let start = reference.timestamp();

    let mut lo = start;
    let mut hi = None;
    let mut t = start;
    while t - start < HORIZON_DAYS * 24 * 3600 {
        t += PROBE_STEP_SECS;
        if zone_state(tz, DateTime::from_timestamp(t, 0)?) != from {
            hi = Some(t);
            break;
        }
        lo = t;
    }
    let mut hi = hi?;

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if zone_state(tz, DateTime::from_timestamp(mid, 0)?) == from {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let activates_at = DateTime::from_timestamp(hi, 0)?;
    let (to_offset, to_abbrev) = zone_state(tz, activates_at);
    Some(TransitionInfo {
        activates_at,
        from_offset: from.0,
        to_offset,
        from_abbrev: from.1,
        to_abbrev,
        is_soon: activates_at - reference < Duration::seconds(SOON_SECS),
    })
}

/// Clock state of `tz` right now.
pub fn current_clock_info(tz: Tz) -> ClockInfo {
    clock_info_at(tz, Utc::now())
}

/// Clock state of `tz` as seen at `now`.
pub fn clock_info_at(tz: Tz, now: DateTime<Utc>) -> ClockInfo {
    match next_transition(tz, now) {
        Some(ti) => ClockInfo {
            offset: ti.from_offset,
            next_offset: Some(ti.to_offset),
            activates: Some(ti.activates_at),
        },
        None => ClockInfo {
            offset: zone_state(tz, now).0,
            next_offset: None,
            activates: None,
        },
    }
}
