// crates/worldmark-core/src/text.rs

/// Convert a string into a folded key suitable for collation.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so accented country names collate
/// next to their unaccented forms under name-sort instead of by raw code
/// point.
///
/// # Examples
///
/// ```rust
/// use worldmark_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("Türkiye"), "turkiye");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(fold_key("FRANCE"), "france");
        assert_eq!(fold_key("São Tomé"), "sao tome");
    }
}
