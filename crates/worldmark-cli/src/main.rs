//! worldmark — Command-line interface for worldmark-core
//!
//! This binary drives the country directory from your terminal: list
//! countries through the region/search/sort pipeline, enumerate regions,
//! inspect one country, and toggle visited marks that persist between runs.
//!
//! Usage examples
//! --------------
//!
//! - List European countries by population, largest first
//!   $ worldmark list --region Europe --sort population --desc
//!
//! - Search by name fragment
//!   $ worldmark list -q united
//!
//! - Show the distinct regions
//!   $ worldmark regions
//!
//! - Mark France as visited (run again to unmark)
//!   $ worldmark toggle FRA
//!
//! - Show visited countries and the running count
//!   $ worldmark visited
//!
//! Data source
//! -----------
//!
//! By default the dataset is fetched once per invocation from the public
//! restcountries endpoint. Use `--input <path>` to read the same JSON payload
//! from a local file instead. Visited marks live in a small JSON file
//! (`visitedCountries.json` by default, override with `--state <path>`);
//! storage problems are logged and never fatal.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use worldmark_core::{
    loader, App, FileStore, LoadState, Result as CoreResult, SortDirection, SortField,
};
use worldmark_core::model::Country;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let store = FileStore::new(
        args.state
            .map(Into::into)
            .unwrap_or_else(FileStore::default_path),
    );
    let mut app = App::new(Box::new(store));

    // The one load of the session.
    app.finish_load(load_dataset(args.input.as_deref()));

    match args.command {
        Commands::List {
            region,
            search,
            sort,
            desc,
        } => {
            require_dataset(&app)?;
            if let Some(region) = region {
                app.set_region(region);
            }
            if let Some(search) = search {
                app.set_search(search);
            }
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            match SortField::parse(&sort) {
                Some(field) => app.set_sort(field, direction),
                // Unrecognized field keeps the default name ordering.
                None => log::warn!("unknown sort field '{sort}', sorting by name"),
            }

            let rows: Vec<(String, String, String, u64)> = app
                .view()
                .iter()
                .map(|c| {
                    (
                        c.name().to_owned(),
                        c.code().to_owned(),
                        c.region().to_owned(),
                        c.population,
                    )
                })
                .collect();
            if rows.is_empty() {
                println!("No countries match the current filters.");
            }
            for (name, code, region, population) in rows {
                let mark = if app.is_visited(&code) { "✓" } else { " " };
                println!("{mark} {name} ({code}) — {region} — pop. {population}");
            }
        }

        Commands::Regions => {
            require_dataset(&app)?;
            for region in app.regions() {
                println!("{region}");
            }
        }

        Commands::Show { code } => {
            require_dataset(&app)?;
            match find_country(&app, &code) {
                Some(c) => {
                    println!("Country: {}", c.name());
                    println!("Official: {}", c.name.official);
                    println!("Code: {}", c.code());
                    println!("Region: {}", c.region());
                    println!("Subregion: {}", c.subregion.as_deref().unwrap_or(""));
                    println!("Capital: {}", c.capital().unwrap_or(""));
                    println!("Population: {}", c.population);
                    println!(
                        "Visited: {}",
                        if app.is_visited(c.code()) { "yes" } else { "no" }
                    );
                }
                None => eprintln!("No country found for: {code}"),
            }
        }

        Commands::Visited => {
            // Works even when the load failed: the set is storage-backed.
            for code in app.visited().iter() {
                match find_country(&app, code) {
                    Some(c) => println!("{} ({})", c.name(), c.code()),
                    None => println!("{code}"),
                }
            }
            println!("Visited: {}", app.visited_count());
        }

        Commands::Toggle { code } => {
            let code = code.to_ascii_uppercase();
            app.toggle_visited(&code);
            let status = if app.is_visited(&code) {
                "visited"
            } else {
                "not visited"
            };
            println!("{code}: {status} ({} total)", app.visited_count());
        }
    }

    Ok(())
}

fn load_dataset(input: Option<&str>) -> CoreResult<Vec<Country>> {
    match input {
        Some(path) => loader::load_json_file(path),
        None => {
            #[cfg(feature = "fetch")]
            {
                loader::fetch_countries()
            }
            #[cfg(not(feature = "fetch"))]
            {
                Err(worldmark_core::WorldmarkError::NotFound(
                    "built without the 'fetch' feature; pass --input <path>".into(),
                ))
            }
        }
    }
}

/// A failed load shows its message in place of any dataset-backed view;
/// visited tracking keeps working regardless.
fn require_dataset(app: &App) -> anyhow::Result<()> {
    match app.load_state() {
        LoadState::Failed(msg) => bail!("failed to load country data: {msg}"),
        _ => Ok(()),
    }
}

fn find_country<'a>(app: &'a App, code: &str) -> Option<&'a Country> {
    app.countries()
        .iter()
        .find(|c| c.code().eq_ignore_ascii_case(code))
}
