// crates/worldmark-core/src/region.rs
use crate::model::Country;
use std::collections::BTreeSet;

/// Collect the distinct, non-empty region values present in the dataset,
/// sorted ascending.
///
/// Pure function of the dataset only; independent of any active filters.
/// Recompute whenever the dataset changes (which, in practice, is once).
pub fn unique_regions(countries: &[Country]) -> Vec<String> {
    let set: BTreeSet<&str> = countries
        .iter()
        .map(Country::region)
        .filter(|r| !r.is_empty())
        .collect();
    set.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Country;

    fn country(name: &str, code: &str, region: &str) -> Country {
        serde_json::from_value(serde_json::json!({
            "name": {"common": name, "official": name},
            "cca3": code,
            "region": if region.is_empty() { serde_json::Value::Null } else { region.into() },
        }))
        .unwrap()
    }

    #[test]
    fn deduplicates_and_sorts() {
        let countries = vec![
            country("Peru", "PER", "Americas"),
            country("France", "FRA", "Europe"),
            country("Germany", "DEU", "Europe"),
            country("Japan", "JPN", "Asia"),
        ];
        assert_eq!(unique_regions(&countries), ["Americas", "Asia", "Europe"]);
    }

    #[test]
    fn discards_empty_regions() {
        let countries = vec![
            country("Atlantis", "ATL", ""),
            country("France", "FRA", "Europe"),
        ];
        assert_eq!(unique_regions(&countries), ["Europe"]);
    }

    #[test]
    fn empty_dataset() {
        assert!(unique_regions(&[]).is_empty());
    }
}
