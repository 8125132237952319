//! Deterministic vendor lookup keys
//!
//! A spec key is the order-fixed concatenation
//! `part|kind|standard|SIZE[|L<length>]`; the length segment is present only
//! for screws and uses the nearest-integer length in millimeters. Keys are
//! insensitive to case and whitespace in their inputs, so `M6x1` and `m6-1`
//! key identically.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::family::{Family, Standard};
use crate::core::spec::{FastenerSpec, PartKind};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static SIZE_XFORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^m(\d+(?:\.\d+)?)x(\d+(?:\.\d+)?)$").unwrap());

/// Strip all whitespace and lower-case
pub fn normalize(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), "").to_lowercase()
}

/// Normalize a size string into upper-cased `M<major>-<pitch>` form
pub fn normalize_size(size: &str) -> String {
    let t = normalize(size).replace('×', "x");
    SIZE_XFORM.replace(&t, "m${1}-${2}").to_uppercase()
}

/// Short purchasing code for a family
pub fn family_kind(family: Family) -> &'static str {
    match family {
        Family::SocketHeadCapScrew => "shcs",
        Family::HexHeadScrew => "hex",
        Family::CounterSunkScrew => "csk",
        Family::PanHeadScrew => "pan",
        Family::HexNut => "hexnut",
    }
}

/// Purchasing alias for a standard.
///
/// Identity today; the seam exists so equivalent standards can be collapsed
/// for sourcing without touching key construction.
pub fn standard_alias(standard: Standard) -> &'static str {
    match standard {
        Standard::Iso4762 => "iso4762",
        Standard::Iso4017 => "iso4017",
        Standard::Iso10642 => "iso10642",
        Standard::Iso1580 => "iso1580",
        Standard::Iso4032 => "iso4032",
    }
}

/// Build the deterministic lookup key for a spec
pub fn build_spec_key(spec: &FastenerSpec) -> String {
    let part = normalize(spec.part.as_str());
    let kind = family_kind(spec.family);
    let standard = standard_alias(spec.standard);
    let size = normalize_size(spec.size.as_str());

    match spec.part {
        PartKind::Screw => {
            let length = spec.length_mm.unwrap_or(0.0).round() as i64;
            format!("{part}|{kind}|{standard}|{size}|L{length}")
        }
        PartKind::Nut => format!("{part}|{kind}|{standard}|{size}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::size::SizeToken;

    fn screw(size: &str, length: f64) -> FastenerSpec {
        FastenerSpec::screw(
            Family::SocketHeadCapScrew,
            Standard::Iso4762,
            size.parse().unwrap(),
            length,
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_strips_whitespace_and_case() {
        assert_eq!(normalize("  Hex Nut "), "hexnut");
        assert_eq!(normalize("SCREW"), "screw");
    }

    #[test]
    fn test_normalize_size_equivalent_forms() {
        assert_eq!(normalize_size("M6x1"), "M6-1");
        assert_eq!(normalize_size("m6-1"), "M6-1");
        assert_eq!(normalize_size("M6 x 1"), "M6-1");
        assert_eq!(normalize_size("m6×1"), "M6-1");
    }

    #[test]
    fn test_screw_key_has_length_segment() {
        let key = build_spec_key(&screw("M6-1", 20.0));
        assert_eq!(key, "screw|shcs|iso4762|M6-1|L20");
    }

    #[test]
    fn test_screw_length_rounds_to_nearest_integer() {
        assert_eq!(build_spec_key(&screw("M6-1", 19.6)), "screw|shcs|iso4762|M6-1|L20");
        assert_eq!(build_spec_key(&screw("M6-1", 19.4)), "screw|shcs|iso4762|M6-1|L19");
    }

    #[test]
    fn test_nut_key_has_no_length_segment() {
        let nut = FastenerSpec::nut(
            Family::HexNut,
            Standard::Iso4032,
            "M6-1".parse::<SizeToken>().unwrap(),
        )
        .unwrap();
        assert_eq!(build_spec_key(&nut), "nut|hexnut|iso4032|M6-1");
    }

    #[test]
    fn test_keys_identical_across_input_spelling() {
        // the size token canonicalizes on parse, so differently-spelled
        // requests describing the same spec build the same key
        let a = build_spec_key(&screw("M6x1", 20.0));
        let b = build_spec_key(&screw("m6 - 1", 20.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_kind_codes_cover_every_family() {
        for family in [
            Family::SocketHeadCapScrew,
            Family::HexHeadScrew,
            Family::CounterSunkScrew,
            Family::PanHeadScrew,
            Family::HexNut,
        ] {
            assert!(!family_kind(family).is_empty());
        }
    }
}
