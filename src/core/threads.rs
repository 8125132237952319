//! Bundled metric thread table
//!
//! Ships the per-(family, standard) coarse-thread size enumeration as an
//! embedded CSV so the resolver works out of the box, standing in for a CAD
//! engine's own size discovery. Rows that fail to parse are skipped.

use rust_embed::Embed;
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::core::family::{Family, Standard};
use crate::core::index::{ProviderError, SizeProvider};
use crate::core::size::SizeToken;

#[derive(Embed)]
#[folder = "data/"]
struct ThreadData;

#[derive(Debug, Deserialize)]
struct ThreadRow {
    family: Family,
    standard: Standard,
    size: SizeToken,
}

/// The embedded thread size table
#[derive(Debug)]
pub struct BundledThreadTable {
    rows: Vec<ThreadRow>,
}

impl BundledThreadTable {
    /// Parse the embedded CSV into a queryable table
    pub fn load() -> Result<Self, ProviderError> {
        let file = ThreadData::get("metric_threads.csv").ok_or_else(|| {
            ProviderError::Enumeration("embedded thread table is missing".to_string())
        })?;

        let mut reader = csv::Reader::from_reader(file.data.as_ref());
        let rows: Vec<ThreadRow> = reader.deserialize().flatten().collect();

        if rows.is_empty() {
            return Err(ProviderError::Enumeration(
                "embedded thread table has no usable rows".to_string(),
            ));
        }
        Ok(Self { rows })
    }
}

impl SizeProvider for BundledThreadTable {
    fn sizes_for(
        &self,
        family: Family,
        standard: Standard,
    ) -> Result<BTreeSet<SizeToken>, ProviderError> {
        let sizes: BTreeSet<SizeToken> = self
            .rows
            .iter()
            .filter(|row| row.family == family && row.standard == standard)
            .map(|row| row.size.clone())
            .collect();

        if sizes.is_empty() {
            return Err(ProviderError::UnsupportedPair { family, standard });
        }
        Ok(sizes)
    }
}
