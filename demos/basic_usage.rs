//! Basic usage example for worldtime-rs
//!
//! This example demonstrates how to:
//! - Load the bundled directory snapshot
//! - Search cities and time zones
//! - Lay out one day of hours for an away zone against a home zone
//! - Look up the next DST transition

use worldtime_core::prelude::*;

fn main() -> Result<()> {
    println!("=== worldtime-rs Basic Usage Example ===\n");

    let path = DirectorySnapshot::default_data_dir().join(DirectorySnapshot::default_snapshot_filename());
    let index = EntityIndex::load_from_path(path, &LoadOptions::default())?;
    let stats = index.stats();
    println!(
        "Loaded {} countries, {} cities, {} time zones\n",
        stats.countries, stats.cities, stats.timezones
    );

    println!("--- Example 1: Ranked search for 'new' ---");
    for zone in index.find_many("new", 5) {
        println!("- {} ({})", zone.full_display_name(), zone.key());
    }
    println!();

    println!("--- Example 2: Paris seen from New York on 2024-03-31 ---");
    let day = CalendarDay::new(2024, 3, 31);
    let result = build_schedule(&index, "FR/Paris", Some("US/New_York/NY"), day)?;
    println!("{}", describe_offset(&result.offsets));
    for slot in result.row.iter().take(4) {
        println!("  {}", slot.slot);
    }
    println!("  ... {} slots in total\n", result.row.len());

    println!("--- Example 3: Next transition in London ---");
    let london = parse_zone("Europe/London")?;
    match next_transition(london, chrono::Utc::now()) {
        Some(ti) => println!("{}", describe_transition(&ti)),
        None => println!("No upcoming transition"),
    }

    Ok(())
}
