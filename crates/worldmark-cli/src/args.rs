use clap::{Parser, Subcommand};

/// CLI arguments for worldmark
#[derive(Debug, Parser)]
#[command(
    name = "worldmark",
    version,
    about = "Browse the world country directory and track visited countries"
)]
pub struct CliArgs {
    /// Path to a local dataset JSON file (default: fetch from restcountries.com)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Path to the visited-set storage file (default: visitedCountries.json)
    #[arg(short = 's', long = "state", global = true)]
    pub state: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries through the filter/search/sort pipeline
    List {
        /// Only countries in this region (exact match, e.g. Europe)
        #[arg(short, long)]
        region: Option<String>,

        /// Only countries whose name contains this text (case-insensitive)
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Sort field: name or population
        #[arg(long, default_value = "name")]
        sort: String,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// List the distinct regions present in the dataset
    Regions,

    /// Show details for a country by its 3-letter code
    Show {
        /// 3-letter code (e.g. FRA, USA)
        code: String,
    },

    /// List visited countries and the running count
    Visited,

    /// Toggle a country's visited mark
    Toggle {
        /// 3-letter code (e.g. FRA, USA)
        code: String,
    },
}
