//! Valid-size index built from an external size enumeration
//!
//! The index is built once at startup and is immutable afterwards, so it can
//! be shared across concurrent resolutions without locking. A pair whose
//! enumeration fails or comes back empty gets an empty set (never absent);
//! lookups on such pairs fall back to the union of all known sizes, which
//! itself degrades to the single hard-coded default token when nothing at all
//! could be enumerated.

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::core::family::{supported_pairs, Family, Standard};
use crate::core::size::SizeToken;

/// Source of catalog-valid sizes per (family, standard) pair.
///
/// Called once per supported pair at startup only. Implementations may fail
/// or return empty sets for pairs they do not know.
pub trait SizeProvider {
    fn sizes_for(
        &self,
        family: Family,
        standard: Standard,
    ) -> Result<BTreeSet<SizeToken>, ProviderError>;
}

/// Errors from size enumeration
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no size data for {family} ({standard})")]
    UnsupportedPair { family: Family, standard: Standard },

    #[error("size enumeration failed: {0}")]
    Enumeration(String),
}

/// Read-only mapping from (family, standard) to the sizes offered for it
#[derive(Debug, Clone)]
pub struct ValidSizeIndex {
    by_pair: BTreeMap<(Family, Standard), BTreeSet<SizeToken>>,
    all: BTreeSet<SizeToken>,
}

impl ValidSizeIndex {
    /// Enumerate every supported pair through `provider` and build the index.
    ///
    /// Enumeration failures degrade to empty per-pair sets; they never fail
    /// the build.
    pub fn build(provider: &dyn SizeProvider) -> Self {
        let mut by_pair = BTreeMap::new();
        let mut all = BTreeSet::new();

        for &(family, standard) in supported_pairs() {
            let sizes = provider.sizes_for(family, standard).unwrap_or_default();
            all.extend(sizes.iter().cloned());
            by_pair.insert((family, standard), sizes);
        }

        if all.is_empty() {
            all.insert(SizeToken::fallback());
        }

        Self { by_pair, all }
    }

    /// An index that knows only the hard-coded default size.
    ///
    /// Used when the size enumeration itself is unavailable; every lookup
    /// then resolves against the single fallback token.
    pub fn fallback_only() -> Self {
        Self {
            by_pair: BTreeMap::new(),
            all: BTreeSet::from([SizeToken::fallback()]),
        }
    }

    /// The acceptable sizes for a pair, falling back to the global union
    /// when the pair has no entries of its own
    pub fn acceptable_for(&self, family: Family, standard: Standard) -> &BTreeSet<SizeToken> {
        match self.by_pair.get(&(family, standard)) {
            Some(sizes) if !sizes.is_empty() => sizes,
            _ => &self.all,
        }
    }

    /// The raw per-pair entry, without union fallback (for listings)
    pub fn sizes_for_pair(
        &self,
        family: Family,
        standard: Standard,
    ) -> Option<&BTreeSet<SizeToken>> {
        self.by_pair.get(&(family, standard))
    }

    /// Union of every size known to any pair, ascending by token string
    pub fn all_sizes(&self) -> &BTreeSet<SizeToken> {
        &self.all
    }
}
