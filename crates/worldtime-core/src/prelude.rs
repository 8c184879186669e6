//! worldtime prelude: bring common types and traits into scope.

pub use crate::catalog::timezone_catalog;
pub use crate::describe::{describe_offset, describe_transition, describe_zone_abbrev};
pub use crate::error::{Result, WorldTimeError};
pub use crate::index::EntityIndex;
pub use crate::loader::LoadOptions;
pub use crate::model::{City, Country, TimezoneEntry, Zone, ZoneKind, ZoneView};
pub use crate::raw::DirectorySnapshot;
pub use crate::schedule::{build_schedule, compare_schedules, CalendarDay, ScheduleResult};
pub use crate::search::ZoneSearch;
pub use crate::traits::SearchKeys;
pub use crate::transition::{current_clock_info, next_transition, parse_zone};
