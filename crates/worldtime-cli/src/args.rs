use clap::{Parser, Subcommand};

/// CLI arguments for worldtime-cli
#[derive(Debug, Parser)]
#[command(
    name = "worldtime",
    version,
    about = "Find cities and time zones, and lay out a day of hours across zones"
)]
pub struct CliArgs {
    /// Path to the directory snapshot (JSON or JSON.gz; default: bundled data dir)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Neither read nor write the binary cache next to the snapshot
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Add built-in entries for time zones the snapshot does not list
    #[arg(long = "builtin-timezones", global = true)]
    pub builtin_timezones: bool,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the directory contents
    Stats,

    /// Show the single best match for a query
    Find {
        /// City or time-zone name (e.g. "paris", "new york", "Europe/Berlin")
        query: String,
    },

    /// List ranked matches for a query
    Search {
        query: String,
        /// Maximum number of results (capped at 50)
        #[arg(short = 'l', long = "limit", default_value_t = 8)]
        limit: usize,
    },

    /// Lay out one day of hourly slots for one or more away zones
    Schedule {
        /// Zone keys or search queries
        #[arg(required = true)]
        away: Vec<String>,
        /// Home zone key or query; offsets are reported against it
        #[arg(long = "home")]
        home: Option<String>,
        /// Calendar day as YYYY-MM-DD (default: today, UTC)
        #[arg(short = 'd', long = "date")]
        date: Option<String>,
    },

    /// Show the next offset change and the current clock of a zone
    Transition {
        /// Zone key or search query
        zone: String,
        /// Reference instant in RFC 3339 (default: now)
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Print the built-in time-zone catalog
    Catalog {
        /// Year whose January/July abbreviations form the short codes
        #[arg(long = "year")]
        year: Option<i32>,
    },
}
