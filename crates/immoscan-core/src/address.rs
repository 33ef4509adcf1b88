//! Best-effort city/street extraction from free-text addresses.
//!
//! Centris addresses usually read `<street>, <city> (<borough>)`. These are
//! display heuristics, not a postal parser: anything that doesn't match
//! yields an empty string rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Extract the city from a free-text address.
///
/// Takes the segment after the first comma and strips a trailing
/// parenthesized qualifier (e.g. a borough name).
pub fn extract_city(address: &str) -> String {
    static QUALIFIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").unwrap());

    match address.split_once(',') {
        Some((_, rest)) => {
            let city = rest.split(',').next().unwrap_or("");
            QUALIFIER_RE.replace(city, "").trim().to_string()
        }
        None => String::new(),
    }
}

/// Extract the street portion: everything before the first comma, or the
/// whole string when there is none.
pub fn extract_street(address: &str) -> String {
    match address.split_once(',') {
        Some((street, _)) => street.trim().to_string(),
        None => address.trim().to_string(),
    }
}
