// crates/worldtime-core/src/schedule.rs

//! # Schedule Engine
//!
//! Builds one calendar day of hourly local-time slots for an away zone,
//! optionally aligned against a home zone.
//!
//! The day runs from local midnight to the next local midnight of the
//! *step zone* (home if given, else away), so it is 23, 24 or 25 hours
//! long around daylight-saving shifts.

use crate::error::{Result, WorldTimeError};
use crate::index::EntityIndex;
use crate::model::{Zone, ZoneView};
use crate::transition::{
    clock_info_at, next_transition, observes_daylight, parse_zone, ClockInfo, TransitionInfo,
};
use chrono::{DateTime, Duration, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SLOT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z (%Z)";
/// Granularity used to find the first existing instant of a day whose
/// midnight falls into a gap.
const GAP_PROBE_MINUTES: i64 = 15;

/// A calendar day, always given as year, month, day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDay {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDay { year, month, day }
    }

    /// Validate into a real date.
    pub fn to_naive(self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| WorldTimeError::InvalidDate(self.to_string()))
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(d: NaiveDate) -> Self {
        use chrono::Datelike;
        CalendarDay::new(d.year(), d.month(), d.day())
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parses `YYYY-MM-DD`. Only the field order is checked here; use
/// [`CalendarDay::to_naive`] to validate the day itself.
impl FromStr for CalendarDay {
    type Err = WorldTimeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WorldTimeError::InvalidDate(s.to_owned());
        let mut parts = s.trim().splitn(3, '-');
        let mut next = || parts.next().filter(|p| !p.is_empty()).ok_or_else(invalid);
        let year = next()?.parse().map_err(|_| invalid())?;
        let month = next()?.parse().map_err(|_| invalid())?;
        let day = next()?.parse().map_err(|_| invalid())?;
        Ok(CalendarDay::new(year, month, day))
    }
}

/// One hourly slot of the schedule row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub at: DateTime<Utc>,
    /// Away-zone local time.
    pub slot: String,
    pub utc: String,
    /// Away minus home wall-clock time in seconds, when a home is set.
    pub offset: Option<i64>,
}

/// A distinct away-zone abbreviation seen during the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneAbbrev {
    pub name: String,
    pub offset: i32,
    pub is_dst: bool,
}

/// Statistics over the per-hour home offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetSummary {
    /// Distinct values, ascending.
    pub all: Vec<i64>,
    pub min: i64,
    pub max: i64,
    pub day_start: i64,
    pub day_end: i64,
    /// Lower-middle element of the sorted, non-deduplicated offsets.
    pub median: i64,
}

impl OffsetSummary {
    /// Summarize per-hour offsets; an empty list is treated as `[0]`.
    pub fn from_offsets(offsets: &[i64]) -> Self {
        if offsets.is_empty() {
            return Self::from_offsets(&[0]);
        }
        let mut sorted = offsets.to_vec();
        sorted.sort_unstable();
        let median = sorted[sorted.len() / 2];
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        sorted.dedup();
        OffsetSummary {
            all: sorted,
            min,
            max,
            day_start: offsets[0],
            day_end: offsets[offsets.len() - 1],
            median,
        }
    }
}

/// A complete day schedule for one away zone.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResult<'a> {
    pub zone: ZoneView<'a>,
    pub home: Option<ZoneView<'a>>,
    pub row_start: DateTime<Utc>,
    pub row_end: DateTime<Utc>,
    pub row: Vec<Slot>,
    pub zones: Vec<ZoneAbbrev>,
    pub offsets: OffsetSummary,
    pub next_transition: Option<TransitionInfo>,
    #[serde(rename = "rtclock")]
    pub clock: ClockInfo,
}

/// Build the schedule for `away_key` on `day`, aligned against `home_key`.
pub fn build_schedule<'a>(
    index: &'a EntityIndex,
    away_key: &str,
    home_key: Option<&str>,
    day: CalendarDay,
) -> Result<ScheduleResult<'a>> {
    build_schedule_at(index, away_key, home_key, day, Utc::now())
}

/// Same as [`build_schedule`], with the real-time clock evaluated at `now`.
pub fn build_schedule_at<'a>(
    index: &'a EntityIndex,
    away_key: &str,
    home_key: Option<&str>,
    day: CalendarDay,
    now: DateTime<Utc>,
) -> Result<ScheduleResult<'a>> {
    let (away, away_tz) = resolve(index, away_key)?;
    let home = home_key.map(|k| resolve(index, k)).transpose()?;
    let home_tz = home.map(|(_, tz)| tz);
    let step_tz = home_tz.unwrap_or(away_tz);

    let date = day.to_naive()?;
    let next = date
        .succ_opt()
        .ok_or_else(|| WorldTimeError::InvalidDate(day.to_string()))?;
    let day_start = local_day_start(step_tz, date)?;
    let day_end = local_day_start(step_tz, next)?;

    let mut row = Vec::with_capacity(25);
    let mut zones: Vec<ZoneAbbrev> = Vec::new();
    let mut offsets = Vec::with_capacity(25);

    let mut t = day_start;
    while t < day_end {
        let ht = t.with_timezone(&away_tz);
        let abbrev = ht.offset().to_string();
        if !zones.iter().any(|z| z.name == abbrev) {
            zones.push(ZoneAbbrev {
                name: abbrev,
                offset: ht.offset().fix().local_minus_utc(),
                is_dst: observes_daylight(away_tz, t),
            });
        }

        let offset = home_tz.map(|tz| {
            let hh = t.with_timezone(&tz);
            (ht.naive_local() - hh.naive_local()).num_seconds()
        });
        offsets.extend(offset);

        row.push(Slot {
            at: t,
            slot: ht.format(SLOT_FORMAT).to_string(),
            utc: t.format(SLOT_FORMAT).to_string(),
            offset,
        });
        t += Duration::hours(1);
    }

    Ok(ScheduleResult {
        zone: away.view(),
        home: home.map(|(z, _)| z.view()),
        row_start: day_start,
        row_end: day_end,
        row,
        zones,
        offsets: OffsetSummary::from_offsets(&offsets),
        next_transition: next_transition(away_tz, day_start),
        clock: clock_info_at(away_tz, now),
    })
}

/// Build one schedule per away key and order them by median home offset.
///
/// Fails on the first key that does not resolve; no partial list is
/// returned.
pub fn compare_schedules<'a>(
    index: &'a EntityIndex,
    away_keys: &[&str],
    home_key: Option<&str>,
    day: CalendarDay,
) -> Result<Vec<ScheduleResult<'a>>> {
    let now = Utc::now();
    let mut rows = away_keys
        .iter()
        .map(|k| build_schedule_at(index, k, home_key, day, now))
        .collect::<Result<Vec<_>>>()?;
    rows.sort_by_key(|r| r.offsets.median);
    Ok(rows)
}

fn resolve<'a>(index: &'a EntityIndex, key: &str) -> Result<(&'a Zone, Tz)> {
    let zone = index
        .lookup_by_key(key)
        .ok_or_else(|| WorldTimeError::ZoneNotFound(key.to_owned()))?;
    Ok((zone, parse_zone(zone.timezone_id())?))
}

/// First existing instant of `date` in `tz`: local midnight, or the end of
/// the gap when the zone skips over midnight. Ambiguous midnights resolve
/// to the earlier instant.
fn local_day_start(tz: Tz, date: NaiveDate) -> Result<DateTime<Utc>> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    let mut minutes = 0;
    while minutes < 24 * 60 {
        let local = midnight + Duration::minutes(minutes);
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return Ok(dt.with_timezone(&Utc));
        }
        minutes += GAP_PROBE_MINUTES;
    }
    Err(WorldTimeError::InvalidDate(date.to_string()))
}
