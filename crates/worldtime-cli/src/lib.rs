//! worldtime-cli
//! =============
//!
//! Command-line host for the `worldtime-core` engine. The binary
//! (`worldtime`) loads a directory snapshot once, resolves user queries to
//! zone keys with the search ranker and prints schedules, transitions and
//! search results as text or JSON.
//!
//! ```text
//! worldtime search "new york" --limit 5
//! worldtime schedule paris tokyo --home "new york" --date 2024-03-31
//! worldtime transition Europe/Paris
//! ```
//!
//! This library target holds the text renderers so they can be tested
//! without a terminal.
#![cfg_attr(docsrs, feature(doc_cfg))]

use anyhow::Context;
use std::fmt::Write;
use std::path::PathBuf;
use worldtime_core::describe::{
    describe_offset, describe_transition, describe_zone_abbrev, format_hours,
};
use worldtime_core::{
    ClockInfo, DirectorySnapshot, DirectoryStats, EntityIndex, LoadOptions, ScheduleResult,
    TransitionInfo, Zone,
};

/// Upper bound for `search --limit`.
pub const MAX_LIMIT: usize = 50;

/// Where the directory snapshot comes from and how it is loaded.
///
/// Commands that need the index load it through this; `catalog` does not.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    pub path: PathBuf,
    pub options: LoadOptions,
}

impl SnapshotSource {
    /// `input` or, when absent, the snapshot bundled with `worldtime-core`.
    pub fn new(input: Option<&str>, options: LoadOptions) -> Self {
        let path = match input {
            Some(p) => PathBuf::from(p),
            None => DirectorySnapshot::default_data_dir()
                .join(DirectorySnapshot::default_snapshot_filename()),
        };
        SnapshotSource { path, options }
    }

    pub fn load(&self) -> anyhow::Result<EntityIndex> {
        EntityIndex::load_from_path(&self.path, &self.options)
            .with_context(|| format!("loading {}", self.path.display()))
    }
}

/// One line per zone: key, full name and the zone it maps to.
pub fn zone_line(zone: &Zone) -> String {
    let mut line = format!("{:<28} {}", zone.key(), zone.full_display_name());
    if zone.timezone_id() != zone.key() {
        let _ = write!(line, " [{}]", zone.timezone_id());
    }
    line
}

pub fn stats_text(stats: &DirectoryStats) -> String {
    format!(
        "Directory statistics:\n  Countries: {}\n  Cities: {}\n  Timezones: {}\n",
        stats.countries, stats.cities, stats.timezones
    )
}

pub fn transition_text(ti: Option<&TransitionInfo>, clock: &ClockInfo) -> String {
    let mut out = String::new();
    match ti {
        Some(ti) => {
            let _ = writeln!(out, "Next transition: {}", describe_transition(ti));
            if ti.is_soon {
                let _ = writeln!(out, "  (within the next seven days)");
            }
        }
        None => {
            let _ = writeln!(out, "No upcoming transition");
        }
    }
    let _ = writeln!(out, "Clock offset: UTC {}", format_hours(clock.offset.into()));
    out
}

pub fn schedule_text(result: &ScheduleResult<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", result.zone.full_display_name, result.zone.key);
    if let Some(home) = &result.home {
        let _ = writeln!(
            out,
            "  {} ({})",
            describe_offset(&result.offsets),
            home.full_display_name
        );
    }
    for z in &result.zones {
        let _ = writeln!(out, "  {}: {}", z.name, describe_zone_abbrev(z));
    }
    if let Some(ti) = &result.next_transition {
        let _ = writeln!(out, "  Next: {}", describe_transition(ti));
    }
    for slot in &result.row {
        match slot.offset {
            Some(o) => {
                let _ = writeln!(out, "  {}  |  {}  |  {}", slot.slot, slot.utc, format_hours(o));
            }
            None => {
                let _ = writeln!(out, "  {}  |  {}", slot.slot, slot.utc);
            }
        }
    }
    out
}
