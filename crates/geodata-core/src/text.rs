// crates/geodata-core/src/text.rs

//! String normalisation shared by the indices and the query engine.
//!
//! Every code family has its own convention: country codes are compared
//! upper-cased, language codes lower-cased, and free-text searches use a
//! lower-cased substring test. Keeping them here guarantees the index builder
//! and the lookups normalise identically.

/// Lower-cases a string for case-insensitive comparison.
///
/// # Examples
///
/// ```
/// use geodata_core::text::fold_lower;
///
/// assert_eq!(fold_lower("CALIfornia"), "california");
/// ```
#[inline]
pub fn fold_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test.
///
/// `needle` is expected to be folded already (see [`fold_lower`]) so that a
/// search folds its query once rather than once per candidate. An empty
/// needle matches every haystack.
///
/// # Examples
///
/// ```
/// use geodata_core::text::contains_folded;
///
/// assert!(contains_folded("California", "cali"));
/// assert!(contains_folded("California", ""));
/// assert!(!contains_folded("Texas", "cali"));
/// ```
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Key form of an ISO2/ISO3 country code.
#[inline]
pub fn normalize_country_code(code: &str) -> String {
    code.to_uppercase()
}

/// Key form of a language code (stored codes are lowercase).
#[inline]
pub fn normalize_language_code(code: &str) -> String {
    code.to_lowercase()
}

/// Parses an optional coordinate string into `f64`.
///
/// - Trims leading and trailing whitespace before parsing.
/// - Returns `None` if the input is `None` or if parsing fails.
///
/// ```
/// use geodata_core::text::parse_opt_f64;
///
/// assert_eq!(parse_opt_f64(Some(" 12.34 ")), Some(12.34));
/// assert_eq!(parse_opt_f64(Some("N/A")), None);
/// assert_eq!(parse_opt_f64(None), None);
/// ```
pub fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
}
