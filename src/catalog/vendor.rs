//! Vendor catalog lookup
//!
//! The catalog is a case/whitespace-insensitive mapping from spec keys to
//! McMaster-Carr part records, loaded once at startup from a CSV file.
//! An absent file is an empty catalog, not an error; lookups never fail,
//! they just miss.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::key;
use crate::core::spec::{FastenerSpec, PartKind};

/// A vendor part record keyed by spec key
#[derive(Debug, Clone, Serialize)]
pub struct VendorMatch {
    /// The spec key as written in the catalog file
    pub spec_key: String,

    /// McMaster-Carr part number
    pub part_number: String,

    /// Catalog description
    pub description: String,

    /// Parts per pack, when listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_qty: Option<u32>,
}

impl VendorMatch {
    /// Canonical product page URL
    pub fn url(&self) -> String {
        format!("https://www.mcmaster.com/{}/", self.part_number)
    }
}

/// Queryable vendor catalog abstraction
pub trait VendorCatalog {
    /// Look up a spec key; absence is a miss, never an error
    fn lookup(&self, spec_key: &str) -> Option<&VendorMatch>;
}

/// Errors from catalog file loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read { path: PathBuf, source: csv::Error },
}

/// CSV-backed vendor catalog
///
/// Expects `spec_key`, `mcmaster_pn`, `description` and `pack_qty` columns;
/// rows missing the key or part number are skipped.
#[derive(Debug, Default)]
pub struct CsvCatalog {
    by_key: HashMap<String, VendorMatch>,
}

impl CsvCatalog {
    /// An empty catalog; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog CSV. An absent file yields an empty catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Ok(Self::empty());
        }

        let mut reader = csv::Reader::from_path(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let headers = reader
            .headers()
            .map_err(|source| CatalogError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .clone();
        let header_map = build_header_map(&headers);

        let mut by_key = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(|source| CatalogError::Read {
                path: path.to_path_buf(),
                source,
            })?;

            let Some(spec_key) = get_field(&record, &header_map, "spec_key") else {
                continue;
            };
            let Some(part_number) = get_field(&record, &header_map, "mcmaster_pn") else {
                continue;
            };
            let description = get_field(&record, &header_map, "description").unwrap_or_default();
            let pack_qty =
                get_field(&record, &header_map, "pack_qty").and_then(|s| s.parse().ok());

            by_key.insert(
                key::normalize(&spec_key),
                VendorMatch {
                    spec_key,
                    part_number,
                    description,
                    pack_qty,
                },
            );
        }

        Ok(Self { by_key })
    }

    /// Number of entries loaded
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl VendorCatalog for CsvCatalog {
    fn lookup(&self, spec_key: &str) -> Option<&VendorMatch> {
        self.by_key.get(&key::normalize(spec_key))
    }
}

/// Build a map from header name to column index
fn build_header_map(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase().trim().to_string(), i))
        .collect()
}

/// Get a non-empty field value from a CSV record
fn get_field(
    record: &csv::StringRecord,
    header_map: &HashMap<String, usize>,
    field: &str,
) -> Option<String> {
    header_map
        .get(field)
        .and_then(|&idx| record.get(idx))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Vendor resolution status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcingStatus {
    Resolved,
    NeedsSourcing,
}

/// Vendor block attached to a resolved item
#[derive(Debug, Clone, Serialize)]
pub struct VendorInfo {
    pub vendor: String,
    pub part_number: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_qty: Option<u32>,
    pub url: String,
}

/// A fastener spec plus its vendor resolution outcome
///
/// Only constructible through [`ResolvedItem::resolved`] and
/// [`ResolvedItem::needs_sourcing`], so the status always agrees with the
/// presence of vendor data.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedItem {
    #[serde(flatten)]
    spec: FastenerSpec,
    status: SourcingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor: Option<VendorInfo>,
}

impl ResolvedItem {
    pub fn resolved(spec: FastenerSpec, found: &VendorMatch) -> Self {
        Self {
            spec,
            status: SourcingStatus::Resolved,
            vendor: Some(VendorInfo {
                vendor: "mcmaster".to_string(),
                part_number: found.part_number.clone(),
                description: found.description.clone(),
                pack_qty: found.pack_qty,
                url: found.url(),
            }),
        }
    }

    pub fn needs_sourcing(spec: FastenerSpec) -> Self {
        Self {
            spec,
            status: SourcingStatus::NeedsSourcing,
            vendor: None,
        }
    }

    pub fn spec(&self) -> &FastenerSpec {
        &self.spec
    }

    pub fn status(&self) -> SourcingStatus {
        self.status
    }

    pub fn vendor(&self) -> Option<&VendorInfo> {
        self.vendor.as_ref()
    }
}

/// Resolve each spec against the catalog.
///
/// Every miss appends one warning naming the unsourced spec; hits attach the
/// vendor block. Item order is preserved.
pub fn resolve_specs(
    specs: Vec<FastenerSpec>,
    catalog: &dyn VendorCatalog,
    warnings: &mut Vec<String>,
) -> Vec<ResolvedItem> {
    specs
        .into_iter()
        .map(|spec| {
            let spec_key = key::build_spec_key(&spec);
            match catalog.lookup(&spec_key) {
                Some(found) => ResolvedItem::resolved(spec, found),
                None => {
                    warnings.push(describe_unsourced(&spec));
                    ResolvedItem::needs_sourcing(spec)
                }
            }
        })
        .collect()
}

fn describe_unsourced(spec: &FastenerSpec) -> String {
    match (spec.part, spec.length_mm) {
        (PartKind::Screw, Some(length)) => format!(
            "No vendor match for screw {} ({}) {} x {} mm; needs sourcing.",
            spec.family,
            spec.standard,
            spec.size,
            length.round() as i64
        ),
        _ => format!(
            "No vendor match for {} {} ({}) {}; needs sourcing.",
            spec.part, spec.family, spec.standard, spec.size
        ),
    }
}
