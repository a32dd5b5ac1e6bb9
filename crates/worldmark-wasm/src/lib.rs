//! worldmark-wasm — WebAssembly bindings for worldmark-core
//!
//! This crate exposes a small, ergonomic JS/WASM API on top of
//! `worldmark-core`: the browser fetches the dataset JSON itself (one
//! request at startup) and hands the text to `init_app`; filtering,
//! searching, sorting and visited toggles all run inside the module.
//! Visited marks are mirrored to `window.localStorage` under the
//! `visitedCountries` key.
//!
//! What it provides
//! ----------------
//! - `init_app(dataset_json)` — parse the payload and hydrate visited marks
//! - `load_error()` — the failure message when the payload was unusable
//! - `regions()` — distinct regions for the dropdown
//! - `set_region(r)`, `set_search(q)`, `set_sort(field, descending)`
//! - `view()` — the filtered/sorted list as plain JS objects
//! - `toggle_visited(code)`, `is_visited(code)`, `visited_count()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { init_app, view, toggle_visited } from 'worldmark-wasm';
//!
//! async function main() {
//!   await init();
//!   const resp = await fetch('https://restcountries.com/v3.1/all');
//!   init_app(await resp.text());
//!
//!   console.log(view()); // full list, name ascending
//!   toggle_visited('FRA');
//! }
//! main();
//! ```

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use worldmark_core::STORAGE_KEY;
use worldmark_core::{loader, App, SortDirection, SortField, VisitedStore};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/* --------------------------------------------------------------------------
   Storage backend: window.localStorage on wasm32, inert elsewhere
-------------------------------------------------------------------------- */

struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl VisitedStore for BrowserStore {
    fn read(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn write(&self, payload: &str) -> std::io::Result<()> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage()
                .ok_or_else(|| std::io::Error::other("localStorage unavailable"))?;
            storage
                .set_item(STORAGE_KEY, payload)
                .map_err(|_| std::io::Error::other("localStorage write rejected"))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = payload;
            Ok(())
        }
    }
}

/* --------------------------------------------------------------------------
   Lifecycle
-------------------------------------------------------------------------- */

/// Initialize the application with the dataset payload fetched by the page.
/// Visited marks are hydrated from localStorage before the parse, so a
/// malformed payload still leaves visited tracking functional.
#[wasm_bindgen]
pub fn init_app(dataset_json: &str) {
    console_error_panic_hook::set_once();

    let mut app = App::new(Box::new(BrowserStore));
    app.finish_load(loader::parse_countries(dataset_json));

    #[cfg(target_arch = "wasm32")]
    match app.error() {
        None => web_sys::console::log_1(
            &format!("worldmark: loaded {} countries", app.countries().len()).into(),
        ),
        Some(msg) => web_sys::console::error_1(&format!("worldmark: {msg}").into()),
    }

    APP.with(|cell| *cell.borrow_mut() = Some(app));
}

/// The load failure message, or `undefined` when the dataset is ready.
#[wasm_bindgen]
pub fn load_error() -> Option<String> {
    with_app(|app| app.error().map(str::to_owned)).flatten()
}

/* --------------------------------------------------------------------------
   Filter/sort state
-------------------------------------------------------------------------- */

/// Empty string selects all regions.
#[wasm_bindgen]
pub fn set_region(region: &str) {
    with_app(|app| app.set_region(region));
}

#[wasm_bindgen]
pub fn set_search(query: &str) {
    with_app(|app| app.set_search(query));
}

/// `field` is "name" or "population"; anything else keeps the default
/// name ordering.
#[wasm_bindgen]
pub fn set_sort(field: &str, descending: bool) {
    let direction = if descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    with_app(|app| {
        app.set_sort(
            SortField::parse(field).unwrap_or(SortField::Name),
            direction,
        )
    });
}

/* --------------------------------------------------------------------------
   Derived view
-------------------------------------------------------------------------- */

/// Flat JS-friendly projection of one country row.
#[derive(Serialize)]
struct CountryRow {
    name: String,
    code: String,
    region: String,
    population: u64,
    flag: String,
    capital: Option<String>,
    visited: bool,
}

/// The filtered/sorted country list as an array of plain objects.
#[wasm_bindgen]
pub fn view() -> JsValue {
    let rows = with_app(|app| {
        let visited = app.visited().clone();
        app.view()
            .into_iter()
            .map(|c| CountryRow {
                name: c.name().to_owned(),
                code: c.code().to_owned(),
                region: c.region().to_owned(),
                population: c.population,
                flag: c.flags.svg.clone(),
                capital: c.capital().map(str::to_owned),
                visited: visited.contains(c.code()),
            })
            .collect::<Vec<_>>()
    })
    .unwrap_or_default();
    to_value(&rows).unwrap()
}

/// Distinct regions present in the dataset, sorted, for the dropdown.
#[wasm_bindgen]
pub fn regions() -> JsValue {
    let regions = with_app(|app| app.regions()).unwrap_or_default();
    to_value(&regions).unwrap()
}

/* --------------------------------------------------------------------------
   Visited tracking
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn toggle_visited(code: &str) {
    with_app(|app| app.toggle_visited(code));
}

#[wasm_bindgen]
pub fn is_visited(code: &str) -> bool {
    with_app(|app| app.is_visited(code)).unwrap_or(false)
}

/// Running count for the "n visited" badge.
#[wasm_bindgen]
pub fn visited_count() -> usize {
    with_app(|app| app.visited_count()).unwrap_or(0)
}
