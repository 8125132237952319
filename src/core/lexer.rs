//! Size and length extraction from normalized request text
//!
//! All functions expect text that has already been trimmed and lower-cased.
//! The lexer never emits warnings; callers decide how to surface rejected or
//! missing tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::core::size::SizeToken;

/// Full "major x pitch" form: m6x1, m6 x 1, m6-1, m6 1, m2.5-0.45
static FULL_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bm(\d+(?:\.\d+)?)\s*(?:x|-|\s)?\s*(\d+(?:\.\d+)?)\b").unwrap());

/// Major-only form: m6, m2.5
static MAJOR_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bm(\d+(?:\.\d+)?)\b").unwrap());

/// Explicit millimeter length: "20mm", "20 mm", "12.5 millimeters"
static LENGTH_MM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)\s*(?:mm|millimeters?)\b").unwrap());

/// Fallback length phrase: "length 20"
static LENGTH_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blength\s*(\d+(?:\.\d+)?)\b").unwrap());

/// Extract a thread size that is a member of `acceptable`.
///
/// A full major×pitch match is canonicalized and returned only if acceptable;
/// a rejected explicit token yields `None` (the caller can recover it with
/// [`explicit_size`] for warning purposes). A major-only match resolves to
/// the lowest-pitch acceptable token with that major, if any.
pub fn extract_metric_size(text: &str, acceptable: &BTreeSet<SizeToken>) -> Option<SizeToken> {
    if let Some(token) = explicit_size(text) {
        return acceptable.contains(&token).then_some(token);
    }

    let caps = MAJOR_ONLY.captures(text)?;
    let major: f64 = caps[1].parse().ok()?;
    acceptable
        .iter()
        .filter(|t| t.major() == major)
        .min_by(|a, b| a.pitch().partial_cmp(&b.pitch()).unwrap_or(Ordering::Equal))
        .cloned()
}

/// Canonicalize an explicit major×pitch token without checking acceptability
pub fn explicit_size(text: &str) -> Option<SizeToken> {
    let caps = FULL_SIZE.captures(text)?;
    let major: f64 = caps[1].parse().ok()?;
    let pitch: f64 = caps[2].parse().ok()?;
    Some(SizeToken::new(major, pitch))
}

/// Extract a length in millimeters.
///
/// Only millimeters are recognized; no unit conversion is performed.
pub fn extract_length_mm(text: &str) -> Option<f64> {
    if let Some(caps) = LENGTH_MM.captures(text) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = LENGTH_WORD.captures(text) {
        return caps[1].parse().ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acceptable(tokens: &[&str]) -> BTreeSet<SizeToken> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_full_size_separator_variants() {
        let set = acceptable(&["M6-1"]);
        for text in ["m6x1 screw", "m6 x 1 screw", "m6-1 screw", "m6 1 screw"] {
            let token = extract_metric_size(text, &set).unwrap();
            assert_eq!(token.as_str(), "M6-1");
        }
    }

    #[test]
    fn test_full_size_rejected_when_not_acceptable() {
        let set = acceptable(&["M6-1"]);
        assert!(extract_metric_size("m5x0.8 screw", &set).is_none());
        // The rejected token is still recoverable for warnings
        assert_eq!(explicit_size("m5x0.8 screw").unwrap().as_str(), "M5-0.8");
    }

    #[test]
    fn test_major_only_picks_lowest_pitch() {
        let set = acceptable(&["M6-1", "M6-0.75", "M8-1.25"]);
        let token = extract_metric_size("m6 socket screw", &set).unwrap();
        assert_eq!(token.as_str(), "M6-0.75");
    }

    #[test]
    fn test_major_only_without_member_is_none() {
        let set = acceptable(&["M8-1.25"]);
        assert!(extract_metric_size("m6 socket screw", &set).is_none());
        assert!(explicit_size("m6 socket screw").is_none());
    }

    #[test]
    fn test_empty_acceptable_set_always_none() {
        let empty = BTreeSet::new();
        assert!(extract_metric_size("m6x1 screw", &empty).is_none());
        assert!(extract_metric_size("m6 screw", &empty).is_none());
    }

    #[test]
    fn test_decimal_major_and_pitch() {
        let set = acceptable(&["M2.5-0.45"]);
        let token = extract_metric_size("m2.5 x 0.45 pan head", &set).unwrap();
        assert_eq!(token.as_str(), "M2.5-0.45");
    }

    #[test]
    fn test_length_mm_variants() {
        assert_eq!(extract_length_mm("20mm long"), Some(20.0));
        assert_eq!(extract_length_mm("20 mm long"), Some(20.0));
        assert_eq!(extract_length_mm("12.5 millimeters"), Some(12.5));
        assert_eq!(extract_length_mm("1 millimeter"), Some(1.0));
    }

    #[test]
    fn test_length_word_fallback() {
        assert_eq!(extract_length_mm("length 35"), Some(35.0));
        assert_eq!(extract_length_mm("length35"), Some(35.0));
    }

    #[test]
    fn test_no_length() {
        assert!(extract_length_mm("m6 socket screw").is_none());
        // inches are not recognized
        assert!(extract_length_mm("2 inch bolt").is_none());
    }
}
