//! Shared loading helpers for commands
//!
//! Startup wiring lives here: the size index and vendor catalog are built
//! once per invocation and degrade rather than abort when their backing data
//! is unavailable.

use clap::ValueEnum;
use console::style;
use std::path::PathBuf;

use crate::catalog::vendor::CsvCatalog;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::index::ValidSizeIndex;
use crate::core::size::SizeToken;
use crate::core::threads::BundledThreadTable;

/// Build the valid-size index, degrading to the fallback-only index when the
/// bundled thread table cannot be loaded
pub fn load_index() -> ValidSizeIndex {
    match BundledThreadTable::load() {
        Ok(table) => ValidSizeIndex::build(&table),
        Err(err) => {
            eprintln!(
                "{} thread table unavailable ({}); only {} will resolve",
                style("⚠").yellow(),
                err,
                SizeToken::fallback()
            );
            ValidSizeIndex::fallback_only()
        }
    }
}

/// Resolve the catalog path from flag, env, then config file
pub fn catalog_path(global: &GlobalOpts, config: &Config) -> Option<PathBuf> {
    global.catalog.clone().or_else(|| config.catalog.clone())
}

/// Load the vendor catalog, degrading to empty on any load failure
pub fn load_catalog(global: &GlobalOpts, config: &Config) -> CsvCatalog {
    let Some(path) = catalog_path(global, config) else {
        return CsvCatalog::empty();
    };
    match CsvCatalog::load(&path) {
        Ok(catalog) => {
            if global.verbose {
                eprintln!(
                    "{} loaded {} catalog entr(ies) from {}",
                    style("→").dim(),
                    catalog.len(),
                    path.display()
                );
            }
            catalog
        }
        Err(err) => {
            eprintln!(
                "{} {}; continuing with an empty catalog",
                style("⚠").yellow(),
                err
            );
            CsvCatalog::empty()
        }
    }
}

/// Apply the configured default format when the command line says auto
pub fn effective_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    config
        .default_format
        .as_deref()
        .and_then(|s| OutputFormat::from_str(s, true).ok())
        .unwrap_or(global.format)
}
