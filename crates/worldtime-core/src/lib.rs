// crates/worldtime-core/src/lib.rs

//! worldtime-core
//! ==============
//!
//! In-memory city and time-zone directory with tiered fuzzy search, plus a
//! DST-aware engine that lays out one calendar day of hourly slots for an
//! "away" zone against an optional "home" zone.
//!
//! ```no_run
//! use worldtime_core::prelude::*;
//!
//! let index = EntityIndex::load_from_path("data/snapshot.json.gz", &LoadOptions::default())?;
//! let paris = index.find_one("paris").expect("no match");
//! let day = build_schedule(&index, paris.key(), None, CalendarDay::new(2024, 3, 31))?;
//! assert_eq!(day.row.len(), 23);
//! # Ok::<(), worldtime_core::WorldTimeError>(())
//! ```

pub mod catalog;
pub mod common;
pub mod describe;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod raw;
pub mod schedule;
pub mod search;
pub mod text;
pub mod traits;
pub mod transition;

// Re-exports
pub use crate::common::DirectoryStats;
pub use crate::error::{Result, WorldTimeError};
pub use crate::index::EntityIndex;
pub use crate::loader::LoadOptions;
pub use crate::model::{City, Country, TimezoneEntry, Zone, ZoneKind, ZoneView};
pub use crate::raw::{CityRecord, CountryRecord, DirectorySnapshot, TimezoneRecord};
pub use crate::schedule::{
    build_schedule, build_schedule_at, compare_schedules, CalendarDay, OffsetSummary,
    ScheduleResult, Slot, ZoneAbbrev,
};
// Export the Search Trait (Crucial for users!)
pub use crate::search::{SearchHit, ZoneSearch};
pub use crate::transition::{
    clock_info_at, current_clock_info, next_transition, ClockInfo, TransitionInfo,
};
