//! `threadfit resolve` command - the full resolution pipeline
//!
//! Parses a request, validates it against the size index, resolves vendor
//! parts, and prints the assembled response. Prompts for the request text
//! when none is given on the command line.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};

use crate::catalog::vendor::resolve_specs;
use crate::cli::helpers::truncate_str;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::resolve::resolver::Resolver;
use crate::resolve::response::{assemble, ChatResponse};

use super::utils::{effective_format, load_catalog, load_index};

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// The request text, e.g. "M6 socket screw 20mm that fits a matching nut"
    pub request: Option<String>,

    /// Skip vendor catalog lookup entirely
    #[arg(long)]
    pub no_vendor: bool,
}

pub fn run(args: ResolveArgs, global: &GlobalOpts) -> Result<()> {
    let request = match args.request {
        Some(request) => request,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Describe the fastener you need")
            .interact_text()
            .into_diagnostic()?,
    };

    let config = Config::load();
    let index = load_index();
    let resolution = Resolver::new(&index).resolve(&request);

    let catalog = if args.no_vendor {
        crate::catalog::vendor::CsvCatalog::empty()
    } else {
        load_catalog(global, &config)
    };

    let mut warnings = resolution.warnings;
    let items = resolve_specs(resolution.items, &catalog, &mut warnings);
    let response = assemble(items, warnings, resolution.intents, &index);

    match effective_format(global, &config) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&response).into_diagnostic()?
            );
        }
        OutputFormat::Text => {
            println!("{}", response.message);
        }
        OutputFormat::Auto => print_styled(&response, global),
    }

    Ok(())
}

fn print_styled(response: &ChatResponse, global: &GlobalOpts) {
    println!("{}", response.message);

    if global.quiet {
        return;
    }

    println!();
    for item in &response.items {
        match item.vendor() {
            Some(vendor) => {
                let pack = vendor
                    .pack_qty
                    .map(|qty| format!(" (pack of {qty})"))
                    .unwrap_or_default();
                println!(
                    "{} {} {}{} {}",
                    style("✓").green(),
                    style(&vendor.part_number).cyan(),
                    truncate_str(&vendor.description, 48),
                    pack,
                    style(&vendor.url).dim()
                );
            }
            None => {
                println!(
                    "{} {} {} - no vendor match, needs sourcing",
                    style("⚠").yellow(),
                    item.spec().part,
                    item.spec().size
                );
            }
        }
    }
}
