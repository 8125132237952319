//! Vendor catalog - deterministic spec keys and part lookup

pub mod key;
pub mod vendor;

pub use key::build_spec_key;
pub use vendor::{
    resolve_specs, CatalogError, CsvCatalog, ResolvedItem, SourcingStatus, VendorCatalog,
    VendorInfo, VendorMatch,
};
