mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use worldtime_core::{
    build_schedule, build_schedule_at, compare_schedules, CalendarDay, DirectorySnapshot,
    EntityIndex, TimezoneRecord, WorldTimeError,
};

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn now() -> DateTime<Utc> {
    utc(2024, 3, 1, 12)
}

#[test]
fn spring_forward_day_in_step_zone_has_23_slots() {
    let index = common::index();
    let day = build_schedule_at(&index, "Europe/Paris", None, CalendarDay::new(2024, 3, 31), now())
        .unwrap();
    assert_eq!(day.row.len(), 23);
    assert_eq!(day.row_start, utc(2024, 3, 30, 23));
    assert_eq!(day.row_end, utc(2024, 3, 31, 22));

    let names: Vec<&str> = day.zones.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["CET", "CEST"]);
    assert_eq!((day.zones[0].offset, day.zones[0].is_dst), (3600, false));
    assert_eq!((day.zones[1].offset, day.zones[1].is_dst), (7200, true));

    assert_eq!(day.row[0].slot, "Sun, 31 Mar 2024 00:00:00 +0100 (CET)");
    assert_eq!(day.row[0].utc, "Sat, 30 Mar 2024 23:00:00 +0000 (UTC)");
    assert_eq!(day.row[2].slot, "Sun, 31 Mar 2024 03:00:00 +0200 (CEST)");
}

#[test]
fn negative_dst_zone_marks_summer_time_as_daylight() {
    // Europe/Dublin stores winter GMT as a negative DST offset.
    let index = EntityIndex::build(DirectorySnapshot {
        countries: vec![],
        cities: vec![],
        timezones: vec![TimezoneRecord {
            key: "Europe/Dublin".into(),
            short_code: "GMT/IST".into(),
            name: "Europe/Dublin".into(),
        }],
    })
    .unwrap();
    let day = build_schedule_at(&index, "Europe/Dublin", None, CalendarDay::new(2024, 3, 31), now())
        .unwrap();
    assert_eq!(day.row.len(), 23);
    let zones: Vec<(&str, i32, bool)> = day
        .zones
        .iter()
        .map(|z| (z.name.as_str(), z.offset, z.is_dst))
        .collect();
    assert_eq!(zones, vec![("GMT", 0, false), ("IST", 3600, true)]);
}

#[test]
fn without_home_offsets_are_a_single_zero() {
    let index = common::index();
    let day = build_schedule_at(&index, "FR/Paris", None, CalendarDay::new(2024, 6, 1), now())
        .unwrap();
    assert_eq!(day.row.len(), 24);
    assert!(day.row.iter().all(|s| s.offset.is_none()));
    assert_eq!(day.offsets.all, vec![0]);
    assert_eq!(
        (day.offsets.min, day.offsets.max, day.offsets.median),
        (0, 0, 0)
    );
    assert!(day.home.is_none());
}

#[test]
fn home_zone_defines_the_day() {
    let index = common::index();
    // New York is the step zone and does not shift on this date.
    let day = build_schedule_at(
        &index,
        "Europe/Paris",
        Some("America/New_York"),
        CalendarDay::new(2024, 3, 31),
        now(),
    )
    .unwrap();
    assert_eq!(day.row.len(), 24);
    assert_eq!(day.row_start, utc(2024, 3, 31, 4));
    assert_eq!(day.zones.len(), 1);
    assert_eq!(day.zones[0].name, "CEST");
    assert_eq!(day.offsets.all, vec![6 * 3600]);
    assert_eq!(day.home.as_ref().map(|h| h.key), Some("America/New_York"));
}

#[test]
fn fall_back_in_home_zone_gives_25_slots_and_offset_stats() {
    let index = common::index();
    let day = build_schedule_at(
        &index,
        "FR/Paris",
        Some("US/New_York/NY"),
        CalendarDay::new(2024, 11, 3),
        now(),
    )
    .unwrap();
    assert_eq!(day.row.len(), 25);
    assert_eq!(day.row_start, utc(2024, 11, 3, 4));
    assert_eq!(day.row_end, utc(2024, 11, 4, 5));

    let o = &day.offsets;
    assert_eq!(o.all, vec![5 * 3600, 6 * 3600]);
    assert_eq!(o.min, 5 * 3600);
    assert_eq!(o.max, 6 * 3600);
    assert_eq!(o.day_start, 5 * 3600);
    assert_eq!(o.day_end, 6 * 3600);
    assert_eq!(o.median, 6 * 3600);
    assert_eq!(day.row[1].offset, Some(5 * 3600));
    assert_eq!(day.row[2].offset, Some(6 * 3600));
}

#[test]
fn row_length_matches_whole_hours_in_interval() {
    let index = common::index();
    for (away, home, d) in [
        ("Europe/Paris", None, CalendarDay::new(2024, 10, 27)),
        ("Asia/Kolkata", Some("Europe/Paris"), CalendarDay::new(2024, 10, 27)),
        ("JP/Tokyo", Some("NZ/Auckland"), CalendarDay::new(2024, 4, 7)),
        ("Japan", None, CalendarDay::new(2024, 1, 1)),
    ] {
        let day = build_schedule_at(&index, away, home, d, now()).unwrap();
        let hours = (day.row_end - day.row_start).num_hours() as usize;
        assert_eq!(day.row.len(), hours, "{away} vs {home:?} on {d}");
    }
}

#[test]
fn same_home_and_away_has_zero_offsets() {
    let index = common::index();
    let day = build_schedule_at(
        &index,
        "GB/London",
        Some("GB/London"),
        CalendarDay::new(2024, 3, 31),
        now(),
    )
    .unwrap();
    assert_eq!(day.row.len(), 23);
    assert!(day.row.iter().all(|s| s.offset == Some(0)));
    assert_eq!(day.offsets.all, vec![0]);
}

#[test]
fn offsets_compare_wall_clocks_across_midnight() {
    let index = common::index();
    let day = build_schedule_at(
        &index,
        "Asia/Kolkata",
        Some("JP/Tokyo"),
        CalendarDay::new(2024, 5, 1),
        now(),
    )
    .unwrap();
    // Kolkata (+5:30) trails Tokyo (+9) by 3.5 hours all day.
    assert_eq!(day.offsets.all, vec![-12_600]);
    assert_eq!(day.row[0].slot, "Tue, 30 Apr 2024 20:30:00 +0530 (IST)");
}

#[test]
fn transition_and_clock_are_attached() {
    let index = common::index();
    let day = build_schedule_at(&index, "Europe/Paris", None, CalendarDay::new(2024, 3, 25), now())
        .unwrap();
    let ti = day.next_transition.expect("paris shifts on 2024-03-31");
    assert_eq!(ti.activates_at, utc(2024, 3, 31, 1));
    assert!(ti.is_soon);
    assert_eq!(day.clock.offset, 3600);
    assert_eq!(day.clock.next_offset, Some(7200));

    let fixed = build_schedule_at(&index, "Asia/Kolkata", None, CalendarDay::new(2024, 3, 25), now())
        .unwrap();
    assert!(fixed.next_transition.is_none());
    assert_eq!(fixed.clock.next_offset, None);
}

#[test]
fn unknown_keys_fail_before_any_work() {
    let index = common::index();
    let day = CalendarDay::new(2024, 3, 31);
    assert!(matches!(
        build_schedule(&index, "XX/Nowhere", None, day),
        Err(WorldTimeError::ZoneNotFound(k)) if k == "XX/Nowhere"
    ));
    assert!(matches!(
        build_schedule(&index, "FR/Paris", Some("Mars/Base"), day),
        Err(WorldTimeError::ZoneNotFound(_))
    ));
}

#[test]
fn invalid_dates_are_rejected() {
    let index = common::index();
    assert!(matches!(
        build_schedule(&index, "FR/Paris", None, CalendarDay::new(2023, 2, 29)),
        Err(WorldTimeError::InvalidDate(_))
    ));
    assert!(matches!(
        "2024/03/31".parse::<CalendarDay>(),
        Err(WorldTimeError::InvalidDate(_))
    ));
}

#[test]
fn compare_orders_rows_by_median_offset() {
    let index = common::index();
    let rows = compare_schedules(
        &index,
        &["JP/Tokyo", "US/New_York/NY", "FR/Paris"],
        Some("GB/London"),
        CalendarDay::new(2024, 6, 1),
    )
    .unwrap();
    let keys: Vec<&str> = rows.iter().map(|r| r.zone.key).collect();
    assert_eq!(keys, vec!["US/New_York/NY", "FR/Paris", "JP/Tokyo"]);

    assert!(compare_schedules(&index, &["FR/Paris", "nope"], None, CalendarDay::new(2024, 6, 1))
        .is_err());
}

#[test]
fn slots_are_one_hour_apart() {
    let index = common::index();
    let day = build_schedule_at(&index, "NZ/Auckland", Some("FR/Paris"), CalendarDay::new(2024, 3, 31), now())
        .unwrap();
    for pair in day.row.windows(2) {
        assert_eq!(pair[1].at - pair[0].at, Duration::hours(1));
    }
}
