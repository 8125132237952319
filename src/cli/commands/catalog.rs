//! `threadfit catalog` commands - vendor catalog utilities

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::catalog::vendor::VendorCatalog;
use crate::cli::GlobalOpts;
use crate::core::config::Config;

use super::utils::{catalog_path, load_catalog};

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Show where the catalog comes from and how many entries it has
    Info,

    /// Look up a spec key in the catalog
    Lookup(LookupArgs),

    /// Print a starter catalog CSV template to stdout
    Template,
}

#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Spec key, e.g. 'screw|shcs|iso4762|M6-1|L20'
    pub key: String,
}

pub fn run(cmd: CatalogCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CatalogCommands::Info => info(global),
        CatalogCommands::Lookup(args) => lookup(args, global),
        CatalogCommands::Template => template(),
    }
}

fn info(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    match catalog_path(global, &config) {
        Some(path) => {
            let catalog = load_catalog(global, &config);
            println!("Catalog: {}", path.display());
            println!("Entries: {}", catalog.len());
        }
        None => {
            println!(
                "No catalog configured. Set one with {}, {}, or the config file.",
                style("--catalog").cyan(),
                style("THREADFIT_CATALOG").cyan()
            );
        }
    }
    Ok(())
}

fn lookup(args: LookupArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = load_catalog(global, &config);

    // A miss is an answer, not an error
    match catalog.lookup(&args.key) {
        Some(found) => {
            println!(
                "{} {} {}",
                style("✓").green(),
                style(&found.part_number).cyan(),
                found.description
            );
            if let Some(qty) = found.pack_qty {
                println!("  pack of {qty}");
            }
            println!("  {}", style(found.url()).dim());
        }
        None => {
            println!("{} no match for '{}'", style("⚠").yellow(), args.key);
        }
    }
    Ok(())
}

fn template() -> Result<()> {
    println!("spec_key,mcmaster_pn,description,pack_qty");
    println!("screw|shcs|iso4762|M6-1|L20,91292A135,\"M6 x 1 mm, 20 mm long socket head cap screw\",100");
    println!("nut|hexnut|iso4032|M6-1,90592A016,\"M6 x 1 mm steel hex nut\",100");

    eprintln!();
    eprintln!(
        "{} Template generated. Redirect to a file: threadfit catalog template > fasteners.csv",
        style("→").blue()
    );
    Ok(())
}
