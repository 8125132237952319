//! Response assembly
//!
//! Renders the human-readable summary and bundles it with the structured
//! item list, the warning audit trail, and the globally valid sizes.

use serde::Serialize;

use crate::catalog::vendor::ResolvedItem;
use crate::core::index::ValidSizeIndex;
use crate::core::spec::PartKind;
use crate::resolve::resolver::Intents;

/// Everything a caller needs to display one resolution run
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Line-oriented human-readable summary
    pub message: String,

    /// Resolved items in resolution order
    pub items: Vec<ResolvedItem>,

    /// Verbatim warning trail
    pub warnings: Vec<String>,

    /// All globally valid size tokens, ascending
    pub valid_sizes: Vec<String>,
}

/// Assemble the response message and payload
pub fn assemble(
    items: Vec<ResolvedItem>,
    warnings: Vec<String>,
    intents: Intents,
    index: &ValidSizeIndex,
) -> ChatResponse {
    let mut lines = vec!["Here's what I understood:".to_string()];

    for item in &items {
        let spec = item.spec();
        match spec.part {
            PartKind::Screw => lines.push(format!(
                "- Screw: {} ({}), {}, length {} mm",
                spec.family,
                spec.standard,
                spec.size,
                spec.length_mm.unwrap_or(0.0) as i64
            )),
            PartKind::Nut => lines.push(format!(
                "- Nut: {} ({}), {}",
                spec.family, spec.standard, spec.size
            )),
        }
    }

    if intents.nut && (intents.matching || intents.screw) {
        lines.push("These will match by thread size/pitch.".to_string());
    }

    if !warnings.is_empty() {
        lines.push("Notes:".to_string());
        for warning in &warnings {
            lines.push(format!("- {warning}"));
        }
    }

    ChatResponse {
        message: lines.join("\n"),
        items,
        warnings,
        valid_sizes: index.all_sizes().iter().map(|t| t.to_string()).collect(),
    }
}
