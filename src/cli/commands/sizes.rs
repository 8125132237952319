//! `threadfit sizes` command - list catalog-valid thread sizes

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::family::{supported_pairs, Family};

use super::utils::{effective_format, load_index};

#[derive(clap::Args, Debug)]
pub struct SizesArgs {
    /// Show only one family (e.g. HexHeadScrew)
    #[arg(long)]
    pub family: Option<Family>,
}

pub fn run(args: SizesArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let index = load_index();

    let pairs: Vec<_> = supported_pairs()
        .iter()
        .filter(|(family, _)| args.family.map_or(true, |wanted| *family == wanted))
        .collect();

    if effective_format(global, &config) == OutputFormat::Json {
        let listing: Vec<_> = pairs
            .iter()
            .map(|(family, standard)| {
                let sizes: Vec<String> = index
                    .sizes_for_pair(*family, *standard)
                    .map(|s| s.iter().map(|t| t.to_string()).collect())
                    .unwrap_or_default();
                serde_json::json!({
                    "family": family,
                    "standard": standard,
                    "sizes": sizes,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).into_diagnostic()?
        );
        return Ok(());
    }

    let mut table = Builder::default();
    table.push_record(["FAMILY", "STANDARD", "SIZES"]);

    let mut total = 0;
    for (family, standard) in &pairs {
        let sizes = index
            .sizes_for_pair(*family, *standard)
            .map(|s| {
                total += s.len();
                s.iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        table.push_record([family.as_str(), standard.as_str(), sizes.as_str()]);
    }

    println!("{}", table.build().with(Style::markdown()));

    if !global.quiet {
        println!();
        println!(
            "{} size(s) across {} famil(ies)",
            style(total).cyan(),
            style(pairs.len()).cyan()
        );
    }

    Ok(())
}
