// crates/worldmark-core/src/state.rs

//! # Application state
//!
//! One controller owns every piece of mutable state: the dataset load state,
//! the transient filter/sort query, and the visited set. Derived values
//! (regions, the filtered/sorted view) are pure functions of that state, so
//! the pipeline is testable without any rendering environment.
//!
//! Execution model is single-threaded and event-driven: each mutation and
//! its persistence reaction run to completion before the next event, so the
//! write that follows a toggle always observes that toggle's result.

use crate::error::WorldmarkError;
use crate::model::Country;
use crate::region::unique_regions;
use crate::view::{derive_view_indices, SortDirection, SortField, ViewQuery};
use crate::visited::{VisitedSet, VisitedStore};

/// Lifecycle of the single startup load. No reload, no retry: a failed load
/// is terminal for the session.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(Vec<Country>),
}

pub struct App {
    dataset: LoadState,
    query: ViewQuery,
    visited: VisitedSet,
    store: Box<dyn VisitedStore>,
    // Memoized view: indices into the Ready dataset, keyed by the query that
    // produced them. The dataset is immutable after load, so indices stay
    // valid until the query changes.
    view_cache: Option<(ViewQuery, Vec<usize>)>,
}

impl App {
    /// Start a session: hydrate the visited set from `store` and enter the
    /// `Loading` state.
    pub fn new(store: Box<dyn VisitedStore>) -> Self {
        let visited = VisitedSet::hydrate(store.as_ref());
        Self {
            dataset: LoadState::Loading,
            query: ViewQuery::default(),
            visited,
            store,
            view_cache: None,
        }
    }

    // -------------------------------------------------------------------------
    // Dataset lifecycle
    // -------------------------------------------------------------------------

    /// Resolve the startup load. Success clears any prior error; failure
    /// leaves the dataset empty and records a human-readable message.
    pub fn finish_load(&mut self, result: Result<Vec<Country>, WorldmarkError>) {
        self.view_cache = None;
        self.dataset = match result {
            Ok(countries) => LoadState::Ready(countries),
            Err(err) => LoadState::Failed(err.to_string()),
        };
    }

    pub fn load_state(&self) -> &LoadState {
        &self.dataset
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.dataset, LoadState::Loading)
    }

    /// Load failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.dataset {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The loaded dataset; empty until `Ready`.
    pub fn countries(&self) -> &[Country] {
        match &self.dataset {
            LoadState::Ready(countries) => countries,
            _ => &[],
        }
    }

    // -------------------------------------------------------------------------
    // Filter/sort state
    // -------------------------------------------------------------------------

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// Empty string selects all regions.
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.query.region = region.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.query.sort_field = field;
        self.query.sort_direction = direction;
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Distinct regions present in the dataset, for the region dropdown.
    pub fn regions(&self) -> Vec<String> {
        unique_regions(self.countries())
    }

    /// The filtered/sorted view. Memoized on the query; recomputed only when
    /// the query (or dataset) has changed since the last call.
    pub fn view(&mut self) -> Vec<&Country> {
        let stale = !matches!(&self.view_cache, Some((q, _)) if *q == self.query);
        if stale {
            let indices = derive_view_indices(self.countries(), &self.query);
            self.view_cache = Some((self.query.clone(), indices));
        }
        let countries = self.countries();
        self.view_cache
            .as_ref()
            .map(|(_, indices)| indices.iter().map(|&i| &countries[i]).collect())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Visited set
    // -------------------------------------------------------------------------

    /// Toggle a country's visited mark, then mirror the new set to storage.
    ///
    /// The persistence write is a reaction to the state change, kept apart
    /// from the pure `toggle` so the set logic stays unit-testable on its
    /// own. Storage failure is logged inside `persist` and never surfaces.
    pub fn toggle_visited(&mut self, code: &str) {
        self.visited = self.visited.toggle(code);
        self.visited.persist(self.store.as_ref());
    }

    pub fn is_visited(&self, code: &str) -> bool {
        self.visited.contains(code)
    }

    /// Running count for the UI surface.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }
}
