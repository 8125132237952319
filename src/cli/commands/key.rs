//! `threadfit key` command - build a vendor lookup key from explicit fields
//!
//! Goes through the checked spec constructor, so invalid part/family/length
//! combinations surface as errors instead of being silently defaulted.

use miette::Result;

use crate::catalog::key::build_spec_key;
use crate::core::family::{Family, Standard};
use crate::core::size::SizeToken;
use crate::core::spec::{FastenerSpec, PartKind};

#[derive(clap::Args, Debug)]
pub struct KeyArgs {
    /// Part kind: screw or nut
    #[arg(long)]
    pub part: PartKind,

    /// Fastener family, e.g. SocketHeadCapScrew
    #[arg(long)]
    pub family: Family,

    /// Dimensional standard, e.g. iso4762
    #[arg(long)]
    pub standard: Standard,

    /// Thread size, e.g. M6-1 or M6x1
    #[arg(long)]
    pub size: SizeToken,

    /// Length in millimeters (screws only)
    #[arg(long)]
    pub length: Option<f64>,
}

pub fn run(args: KeyArgs) -> Result<()> {
    let spec = FastenerSpec::from_parts(
        args.part,
        args.family,
        args.standard,
        args.size,
        args.length,
    )
    .map_err(|err| miette::miette!("{err}"))?;

    println!("{}", build_spec_key(&spec));
    Ok(())
}
