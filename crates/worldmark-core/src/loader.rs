// crates/worldmark-core/src/loader.rs

//! # Dataset loader
//!
//! One retrieval of the full country list per session. The network path
//! (feature `fetch`) pulls from the public restcountries endpoint; the file
//! path reads the same JSON payload from disk for offline and test use.
//!
//! Either way the outcome maps onto [`crate::state::LoadState`]: the caller
//! hands the `Result` to [`crate::state::App::finish_load`] and the dataset
//! is `Ready` or `Failed` for the rest of the session. No retry policy.

use crate::error::{Result, WorldmarkError};
use crate::model::Country;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The fixed public endpoint. Full list, no authentication, no pagination.
pub const DATASET_URL: &str = "https://restcountries.com/v3.1/all";

/// Cap on the whole request, so a dead network fails the load instead of
/// hanging the session.
#[cfg(feature = "fetch")]
pub const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Fetch the full country list from [`DATASET_URL`].
///
/// Non-2xx status codes are surfaced as [`WorldmarkError::Status`]; transport
/// and decode failures as [`WorldmarkError::Http`].
#[cfg(feature = "fetch")]
pub fn fetch_countries() -> Result<Vec<Country>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.get(DATASET_URL).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(WorldmarkError::Status(status.as_u16()));
    }
    Ok(response.json()?)
}

/// Load the same payload from a local JSON file.
pub fn load_json_file(path: impl AsRef<Path>) -> Result<Vec<Country>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        WorldmarkError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a payload already in memory (the WASM surface receives the JSON
/// text from the browser's own fetch).
pub fn parse_countries(json: &str) -> Result<Vec<Country>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payload_text() {
        let countries = parse_countries(
            r#"[{"name":{"common":"Japan","official":"Japan"},"cca3":"JPN","region":"Asia","population":125000000}]"#,
        )
        .unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].code(), "JPN");
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(parse_countries(r#"{"not":"a list"}"#).is_err());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_json_file("/no/such/dataset.json").unwrap_err();
        assert!(matches!(err, WorldmarkError::NotFound(_)));
    }
}
