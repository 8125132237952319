//! Free-text request resolution
//!
//! Turns one request string into complete fastener specs, applying the
//! fallback policy and recording a warning for every substitution made.
//! Resolution never fails: worst case it returns the hard-coded default spec
//! with warnings explaining each assumption.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::core::family::{classify, Family, Standard};
use crate::core::index::ValidSizeIndex;
use crate::core::lexer;
use crate::core::size::SizeToken;
use crate::core::spec::FastenerSpec;

/// Default screw length when the request names none
const DEFAULT_LENGTH_MM: f64 = 20.0;

/// What the request asked for, detected from keywords
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct Intents {
    pub screw: bool,
    pub nut: bool,
    /// Informational only; never changes how items resolve
    pub matching: bool,
}

/// Result of one resolution run, before vendor lookup
#[derive(Debug)]
pub struct Resolution {
    /// Specs in resolution order (screw before nut)
    pub items: Vec<FastenerSpec>,
    /// One entry per substitution, in the order items were resolved
    pub warnings: Vec<String>,
    pub intents: Intents,
}

/// Resolves requests against an immutable valid-size index
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a ValidSizeIndex,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a ValidSizeIndex) -> Self {
        Self { index }
    }

    /// Resolve a free-text request into one or more fastener specs.
    ///
    /// Always returns at least one item: with no screw/nut keyword at all, a
    /// single screw is synthesized from the classified family.
    pub fn resolve(&self, request: &str) -> Resolution {
        let text = request.trim().to_lowercase();

        let intents = Intents {
            screw: text.contains("screw") || text.contains("bolt"),
            nut: text.contains("nut"),
            matching: text.contains("fit")
                || text.contains("matching")
                || text.contains("that fits")
                || text.contains("that will fit"),
        };

        let (family, standard) = classify(&text);

        let mut items = Vec::new();
        let mut warnings = Vec::new();

        if intents.screw {
            if let Some(spec) = self.screw_item(&text, family, standard, &mut warnings) {
                items.push(spec);
            }
        }

        if intents.nut {
            if let Some(spec) = self.nut_item(&text, &mut warnings) {
                items.push(spec);
            }
        }

        if items.is_empty() {
            // No explicit part keyword: guess a screw
            if let Some(spec) = self.screw_item(&text, family, standard, &mut warnings) {
                items.push(spec);
            }
        }

        Resolution {
            items,
            warnings,
            intents,
        }
    }

    fn screw_item(
        &self,
        text: &str,
        family: Family,
        standard: Standard,
        warnings: &mut Vec<String>,
    ) -> Option<FastenerSpec> {
        let size = self.resolve_size(text, family, standard, warnings);
        let length = lexer::extract_length_mm(text).unwrap_or(DEFAULT_LENGTH_MM);
        match FastenerSpec::screw(family, standard, size, length) {
            Ok(spec) => Some(spec),
            Err(err) => {
                // unreachable with the classifier's screw-only families
                warnings.push(err.to_string());
                None
            }
        }
    }

    fn nut_item(&self, text: &str, warnings: &mut Vec<String>) -> Option<FastenerSpec> {
        let size = self.resolve_size(text, Family::HexNut, Standard::Iso4032, warnings);
        match FastenerSpec::nut(Family::HexNut, Standard::Iso4032, size) {
            Ok(spec) => Some(spec),
            Err(err) => {
                warnings.push(err.to_string());
                None
            }
        }
    }

    /// Resolve a size against one pair's acceptable set, warning on every
    /// substitution. Never fails; degrades to the fallback size.
    fn resolve_size(
        &self,
        text: &str,
        family: Family,
        standard: Standard,
        warnings: &mut Vec<String>,
    ) -> SizeToken {
        let acceptable = self.index.acceptable_for(family, standard);

        if let Some(token) = lexer::extract_metric_size(text, acceptable) {
            return token;
        }

        let fallback = fallback_size(acceptable);
        if let Some(rejected) = lexer::explicit_size(text) {
            warnings.push(format!(
                "Requested size {rejected} is not offered for {family} ({standard}); using {fallback} instead."
            ));
        } else {
            warnings.push(format!(
                "No valid metric thread size detected for {family} ({standard}); using {fallback} instead."
            ));
        }
        fallback
    }
}

/// Pick a stand-in size from an acceptable set.
///
/// Prefers the hard-coded default, then the lowest-pitch member sharing the
/// default's major diameter, and finally the literal default token even when
/// unvalidated - the fallback never fails.
pub fn fallback_size(acceptable: &BTreeSet<SizeToken>) -> SizeToken {
    let default = SizeToken::fallback();
    if acceptable.contains(&default) {
        return default;
    }
    acceptable
        .iter()
        .filter(|t| t.major() == default.major())
        .min_by(|a, b| a.pitch().partial_cmp(&b.pitch()).unwrap_or(Ordering::Equal))
        .cloned()
        .unwrap_or(default)
}
