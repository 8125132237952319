//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    catalog::CatalogCommands, completions::CompletionsArgs, key::KeyArgs, resolve::ResolveArgs,
    sizes::SizesArgs,
};

#[derive(Parser)]
#[command(name = "threadfit")]
#[command(author, version, about = "Resolve free-text fastener requests into vendor-ready part specs")]
#[command(
    long_about = "Turns informal requests like \"M6 socket screw 20mm that fits a matching nut\" into fully-specified, catalog-valid fastener specs, each resolved to a McMaster-Carr part number when the vendor catalog knows it."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Vendor catalog CSV (default: config file setting)
    #[arg(long, global = true, env = "THREADFIT_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a free-text fastener request
    Resolve(ResolveArgs),

    /// List catalog-valid thread sizes per family/standard
    Sizes(SizesArgs),

    /// Build the deterministic vendor lookup key for a spec
    Key(KeyArgs),

    /// Vendor catalog utilities
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled human-readable output
    #[default]
    Auto,

    /// Plain text (message only, pipe-friendly)
    Text,

    /// JSON (full response, for programming)
    Json,
}
