//! worldtime: command-line host for worldtime-core
//!
//! Loads a directory snapshot once and answers queries against it: ranked
//! city/time-zone search, one-day hourly schedules across zones, and the
//! next DST transition of a zone.
//!
//! Usage examples
//! --------------
//!
//! - Show directory stats
//!   $ worldtime stats
//!
//! - Best match, or a ranked list
//!   $ worldtime find "paris, france"
//!   $ worldtime search new --limit 5
//!
//! - One day of hours for two away zones, aligned to a home zone
//!   $ worldtime schedule paris tokyo --home "new york" --date 2024-03-31
//!
//! - Next offset change
//!   $ worldtime transition Europe/London
//!
//! Data source
//! -----------
//!
//! By default the snapshot bundled under `worldtime-core/data` is loaded and
//! a binary cache is written next to it. Use `--input <path>` for another
//! `.json` or `.json.gz` snapshot and `--no-cache` to skip the cache.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{anyhow, Context};
use chrono::{DateTime, Datelike, Utc};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use worldtime_cli::{
    schedule_text, stats_text, transition_text, zone_line, SnapshotSource, MAX_LIMIT,
};
use worldtime_core::clock_info_at;
use worldtime_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let source = SnapshotSource::new(
        args.input.as_deref(),
        LoadOptions {
            use_cache: !args.no_cache,
            builtin_timezones: args.builtin_timezones,
        },
    );

    match args.command {
        // The catalog comes from the bundled tz database, no snapshot needed
        Commands::Catalog { year } => {
            let year = year.unwrap_or_else(|| Utc::now().year());
            let catalog = timezone_catalog(year);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for tz in &catalog {
                    println!("{:<32} {}", tz.key, tz.short_code);
                }
            }
        }

        Commands::Stats => {
            let index = source.load()?;
            let stats = index.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", stats_text(&stats));
            }
        }

        Commands::Find { query } => {
            let index = source.load()?;
            match index.find_one(&query) {
                Some(zone) if args.json => {
                    println!("{}", serde_json::to_string_pretty(&zone.view())?)
                }
                Some(zone) => println!("{}", zone_line(zone)),
                None => eprintln!("No match for '{query}'"),
            }
        }

        Commands::Search { query, limit } => {
            let index = source.load()?;
            let limit = limit.min(MAX_LIMIT);
            let hits = index.find_many(&query, limit);
            if args.json {
                let views: Vec<_> = hits.iter().map(|z| z.view()).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if hits.is_empty() {
                eprintln!("No match for '{query}'");
            } else {
                for zone in hits {
                    println!("{}", zone_line(zone));
                }
            }
        }

        Commands::Schedule { away, home, date } => {
            let index = source.load()?;
            let day = match date {
                Some(d) => d.parse::<CalendarDay>()?,
                None => CalendarDay::from(Utc::now().date_naive()),
            };
            let home_key = home.as_deref().map(|q| resolve_key(&index, q)).transpose()?;
            let away_keys = away
                .iter()
                .map(|q| resolve_key(&index, q))
                .collect::<anyhow::Result<Vec<_>>>()?;
            debug!(?away_keys, ?home_key, %day, "building schedules");
            let rows = compare_schedules(&index, &away_keys, home_key, day)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print!("{}", schedule_text(row));
                }
            }
        }

        Commands::Transition { zone, at } => {
            let index = source.load()?;
            let key = resolve_key(&index, &zone)?;
            let entry = index
                .lookup_by_key(key)
                .ok_or_else(|| anyhow!("zone '{key}' vanished from the index"))?;
            let tz = parse_zone(entry.timezone_id())?;
            let reference = match at {
                Some(s) => DateTime::parse_from_rfc3339(&s)
                    .with_context(|| format!("invalid --at instant '{s}'"))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let ti = next_transition(tz, reference);
            let clock = clock_info_at(tz, reference);
            if args.json {
                let out = serde_json::json!({
                    "zone": entry.view(),
                    "next_transition": ti,
                    "rtclock": clock,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", zone_line(entry));
                print!("{}", transition_text(ti.as_ref(), &clock));
            }
        }
    }

    Ok(())
}

/// A zone key is used as is; anything else goes through the ranker.
fn resolve_key<'a>(index: &'a EntityIndex, query: &'a str) -> anyhow::Result<&'a str> {
    if index.lookup_by_key(query).is_some() {
        return Ok(query);
    }
    index
        .find_one(query)
        .map(|z| z.key())
        .ok_or_else(|| anyhow!("no city or time zone matches '{query}'"))
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
