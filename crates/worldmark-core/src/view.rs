// crates/worldmark-core/src/view.rs

//! # Derived-view pipeline
//!
//! Pure function chain over the loaded dataset: region filter → search
//! filter → stable sort. Safe to recompute on every state change; the
//! [`crate::state::App`] controller memoizes the result keyed by the query,
//! but correctness never depends on that memo.

use crate::model::Country;
use crate::text::fold_key;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Population,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The transient filter/sort state. Not persisted; resets to defaults
/// (no filters, name ascending) on every session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewQuery {
    /// Empty string means "all regions".
    pub region: String,
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            region: String::new(),
            search: String::new(),
            sort_field: SortField::Name,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl ViewQuery {
    /// Region filter: exact, case-sensitive match; empty selection passes all.
    fn matches_region(&self, country: &Country) -> bool {
        self.region.is_empty() || country.region() == self.region
    }

    /// Search filter: lowercased substring containment on the common name.
    /// No tokenization, no fuzzy matching, no diacritic normalization: the
    /// query "zur" does not match "Zürich"-style names. The transliterated
    /// [`fold_key`] is reserved for collation below.
    fn matches_search(&self, country: &Country) -> bool {
        self.search.is_empty()
            || country
                .name()
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    fn compare(&self, a: &Country, b: &Country) -> Ordering {
        let ord = match self.sort_field {
            SortField::Name => fold_key(a.name()).cmp(&fold_key(b.name())),
            SortField::Population => a.population.cmp(&b.population),
        };
        match self.sort_direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Apply the full pipeline and return references into the dataset in display
/// order. Pure and deterministic: identical inputs always yield the identical
/// sequence.
///
/// The sort is stable (`sort_by`), so entries comparing equal (same
/// population, or names identical after folding) keep their pre-sort
/// relative order in either direction.
pub fn derive_view<'a>(countries: &'a [Country], query: &ViewQuery) -> Vec<&'a Country> {
    derive_view_indices(countries, query)
        .into_iter()
        .map(|i| &countries[i])
        .collect()
}

/// Index form of [`derive_view`], used by the controller's memo so cached
/// results stay valid as long as the dataset snapshot does.
pub(crate) fn derive_view_indices(countries: &[Country], query: &ViewQuery) -> Vec<usize> {
    let mut out: Vec<usize> = countries
        .iter()
        .enumerate()
        .filter(|(_, c)| query.matches_region(c) && query.matches_search(c))
        .map(|(i, _)| i)
        .collect();
    out.sort_by(|&a, &b| query.compare(&countries[a], &countries[b]));
    out
}

impl SortField {
    /// Lenient parse for external surfaces; anything unrecognized is `None`
    /// and callers fall back to the default ordering.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "population" => Some(Self::Population),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, code: &str, region: &str, population: u64) -> Country {
        serde_json::from_value(serde_json::json!({
            "name": {"common": name, "official": name},
            "cca3": code,
            "region": region,
            "population": population,
        }))
        .unwrap()
    }

    fn fixture() -> Vec<Country> {
        vec![
            country("France", "FRA", "Europe", 67_000_000),
            country("Germany", "DEU", "Europe", 83_000_000),
            country("United States", "USA", "Americas", 331_000_000),
        ]
    }

    fn names<'a>(view: &[&'a Country]) -> Vec<&'a str> {
        view.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn region_filter_with_population_descending() {
        let countries = fixture();
        let query = ViewQuery {
            region: "Europe".into(),
            sort_field: SortField::Population,
            sort_direction: SortDirection::Descending,
            ..ViewQuery::default()
        };
        assert_eq!(names(&derive_view(&countries, &query)), ["Germany", "France"]);
    }

    #[test]
    fn search_filter_overrides_nothing_else() {
        let countries = fixture();
        for field in [SortField::Name, SortField::Population] {
            let query = ViewQuery {
                search: "united".into(),
                sort_field: field,
                ..ViewQuery::default()
            };
            assert_eq!(names(&derive_view(&countries, &query)), ["United States"]);
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let countries = fixture();
        let query = ViewQuery {
            search: "fra".into(),
            ..ViewQuery::default()
        };
        assert_eq!(names(&derive_view(&countries, &query)), ["France"]);
    }

    #[test]
    fn search_does_not_normalize_diacritics() {
        let countries = vec![country("Åland Islands", "ALA", "Europe", 29_458)];
        let query = ViewQuery {
            search: "aland".into(),
            ..ViewQuery::default()
        };
        assert!(derive_view(&countries, &query).is_empty());

        let query = ViewQuery {
            search: "åland".into(),
            ..ViewQuery::default()
        };
        assert_eq!(derive_view(&countries, &query).len(), 1);
    }

    #[test]
    fn region_match_is_exact_and_case_sensitive() {
        let countries = fixture();
        let query = ViewQuery {
            region: "europe".into(),
            ..ViewQuery::default()
        };
        assert!(derive_view(&countries, &query).is_empty());
    }

    #[test]
    fn name_sort_collates_accented_names() {
        let countries = vec![
            country("Zimbabwe", "ZWE", "Africa", 1),
            country("Åland Islands", "ALA", "Europe", 1),
            country("Albania", "ALB", "Europe", 1),
        ];
        let query = ViewQuery::default();
        // "Åland" folds to "aland" and lands before "Albania", not after "Z".
        assert_eq!(
            names(&derive_view(&countries, &query)),
            ["Åland Islands", "Albania", "Zimbabwe"]
        );
    }

    #[test]
    fn population_sort_is_stable_on_ties() {
        let countries = vec![
            country("Bravo", "BBB", "X", 500),
            country("Alpha", "AAA", "X", 500),
            country("Tiny", "TTT", "X", 100),
        ];
        let query = ViewQuery {
            sort_field: SortField::Population,
            ..ViewQuery::default()
        };
        // Ascending: Tiny first, then the tied pair in input order.
        assert_eq!(names(&derive_view(&countries, &query)), ["Tiny", "Bravo", "Alpha"]);

        let desc = ViewQuery {
            sort_direction: SortDirection::Descending,
            ..query
        };
        // Descending reverses the comparison, not the tie order.
        assert_eq!(names(&derive_view(&countries, &desc)), ["Bravo", "Alpha", "Tiny"]);
    }

    #[test]
    fn idempotent_under_reinvocation() {
        let countries = fixture();
        let query = ViewQuery {
            region: "Europe".into(),
            search: "a".into(),
            sort_field: SortField::Population,
            sort_direction: SortDirection::Descending,
        };
        let first = names(&derive_view(&countries, &query));
        let second = names(&derive_view(&countries, &query));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_dataset_yields_empty_view() {
        assert!(derive_view(&[], &ViewQuery::default()).is_empty());
    }

    #[test]
    fn sort_field_parse() {
        assert_eq!(SortField::parse("Population"), Some(SortField::Population));
        assert_eq!(SortField::parse(" name "), Some(SortField::Name));
        assert_eq!(SortField::parse("area"), None);
    }
}
