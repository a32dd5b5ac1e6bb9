//! Basic usage example for worldmark-rs
//!
//! This example demonstrates how to:
//! - Load the country dataset (from the network, or a local JSON file)
//! - Drive the region/search/sort view pipeline
//! - Toggle visited marks and see them persisted
//!
//! Run with a local snapshot to avoid the network:
//!   cargo run --example basic_usage -- crates/worldmark-core/tests/data/countries.json

use worldmark_core::{
    loader, App, MemoryStore, Result, SortDirection, SortField,
};

fn main() -> Result<()> {
    println!("=== Worldmark Basic Usage Example ===\n");

    // Load the dataset
    println!("Loading country dataset...");
    let countries = match std::env::args().nth(1) {
        Some(path) => loader::load_json_file(path)?,
        None => loader::fetch_countries()?,
    };
    println!("✓ Loaded {} countries\n", countries.len());

    // The session: in-memory storage here; the CLI uses a JSON file and the
    // browser build uses localStorage.
    let mut app = App::new(Box::<MemoryStore>::default());
    app.finish_load(Ok(countries));

    // Example 1: the region dropdown
    println!("--- Example 1: Distinct regions ---");
    for region in app.regions() {
        println!("- {region}");
    }
    println!();

    // Example 2: Europe by population, largest first
    println!("--- Example 2: Europe by population ---");
    app.set_region("Europe");
    app.set_sort(SortField::Population, SortDirection::Descending);
    for country in app.view().iter().take(5) {
        println!("{} — pop. {}", country.name(), country.population);
    }
    println!();

    // Example 3: name search across all regions
    println!("--- Example 3: Search for 'united' ---");
    app.set_region("");
    app.set_search("united");
    for country in app.view() {
        println!("{} ({})", country.name(), country.code());
    }
    println!();

    // Example 4: visited tracking
    println!("--- Example 4: Visited marks ---");
    app.toggle_visited("FRA");
    app.toggle_visited("JPN");
    println!("Visited {} countries:", app.visited_count());
    for code in app.visited().iter() {
        println!("- {code}");
    }

    Ok(())
}
