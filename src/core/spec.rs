//! Fastener specifications - the finalized output of resolution
//!
//! A `FastenerSpec` is what downstream consumers (geometry export, drawing
//! title blocks, vendor lookup) receive. Constructors enforce the part/length
//! invariants rather than leaving them to convention: screws always carry a
//! length and a screw family, nuts never carry a length.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::family::{Family, Standard};
use crate::core::size::SizeToken;

/// Kind of part being specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Screw,
    Nut,
}

impl PartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartKind::Screw => "screw",
            PartKind::Nut => "nut",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "screw" => Ok(PartKind::Screw),
            "nut" => Ok(PartKind::Nut),
            _ => Err(format!("Invalid part kind: {}. Use 'screw' or 'nut'", s)),
        }
    }
}

/// A fully-specified fastener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastenerSpec {
    /// Part kind (screw or nut)
    pub part: PartKind,

    /// Shape family, e.g. SocketHeadCapScrew
    pub family: Family,

    /// Dimensional standard, e.g. iso4762
    pub standard: Standard,

    /// Canonical thread size
    pub size: SizeToken,

    /// Length in millimeters; present exactly for screws
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_mm: Option<f64>,

    /// Skip helical thread geometry downstream (faster modeling)
    #[serde(default = "default_simple")]
    pub simple: bool,
}

fn default_simple() -> bool {
    true
}

impl FastenerSpec {
    /// Build a screw spec; the family must be a screw shape
    pub fn screw(
        family: Family,
        standard: Standard,
        size: SizeToken,
        length_mm: f64,
    ) -> Result<Self, SpecError> {
        if !family.is_screw() {
            return Err(SpecError::UnsupportedCombination {
                part: PartKind::Screw,
                family,
            });
        }
        Ok(Self {
            part: PartKind::Screw,
            family,
            standard,
            size,
            length_mm: Some(length_mm),
            simple: true,
        })
    }

    /// Build a nut spec; the family must be a nut shape
    pub fn nut(family: Family, standard: Standard, size: SizeToken) -> Result<Self, SpecError> {
        if family.is_screw() {
            return Err(SpecError::UnsupportedCombination {
                part: PartKind::Nut,
                family,
            });
        }
        Ok(Self {
            part: PartKind::Nut,
            family,
            standard,
            size,
            length_mm: None,
            simple: true,
        })
    }

    /// Build a spec from loose fields, validating the part/length invariant.
    ///
    /// This is the path user-supplied field sets (CLI, API shells) go
    /// through; violations surface as errors rather than being defaulted.
    pub fn from_parts(
        part: PartKind,
        family: Family,
        standard: Standard,
        size: SizeToken,
        length_mm: Option<f64>,
    ) -> Result<Self, SpecError> {
        match part {
            PartKind::Screw => {
                let length = length_mm.ok_or(SpecError::MissingLength)?;
                Self::screw(family, standard, size, length)
            }
            PartKind::Nut => {
                if length_mm.is_some() {
                    return Err(SpecError::UnexpectedLength);
                }
                Self::nut(family, standard, size)
            }
        }
    }
}

/// Errors from fastener spec construction
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("unsupported combination: a {part} cannot use family {family}")]
    UnsupportedCombination { part: PartKind, family: Family },

    #[error("length_mm is required for screws")]
    MissingLength,

    #[error("nuts do not take a length")]
    UnexpectedLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m6() -> SizeToken {
        "M6-1".parse().unwrap()
    }

    #[test]
    fn test_screw_carries_length() {
        let spec =
            FastenerSpec::screw(Family::SocketHeadCapScrew, Standard::Iso4762, m6(), 20.0).unwrap();
        assert_eq!(spec.part, PartKind::Screw);
        assert_eq!(spec.length_mm, Some(20.0));
        assert!(spec.simple);
    }

    #[test]
    fn test_nut_never_carries_length() {
        let spec = FastenerSpec::nut(Family::HexNut, Standard::Iso4032, m6()).unwrap();
        assert_eq!(spec.part, PartKind::Nut);
        assert_eq!(spec.length_mm, None);
    }

    #[test]
    fn test_screw_rejects_nut_family() {
        let err = FastenerSpec::screw(Family::HexNut, Standard::Iso4032, m6(), 20.0).unwrap_err();
        assert!(matches!(err, SpecError::UnsupportedCombination { .. }));
    }

    #[test]
    fn test_nut_rejects_screw_family() {
        let err = FastenerSpec::nut(Family::HexHeadScrew, Standard::Iso4017, m6()).unwrap_err();
        assert!(matches!(err, SpecError::UnsupportedCombination { .. }));
    }

    #[test]
    fn test_from_parts_requires_screw_length() {
        let err = FastenerSpec::from_parts(
            PartKind::Screw,
            Family::SocketHeadCapScrew,
            Standard::Iso4762,
            m6(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::MissingLength));
    }

    #[test]
    fn test_from_parts_rejects_nut_length() {
        let err = FastenerSpec::from_parts(
            PartKind::Nut,
            Family::HexNut,
            Standard::Iso4032,
            m6(),
            Some(5.0),
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::UnexpectedLength));
    }

    #[test]
    fn test_serialized_shape() {
        let spec =
            FastenerSpec::screw(Family::SocketHeadCapScrew, Standard::Iso4762, m6(), 20.0).unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["part"], "screw");
        assert_eq!(json["family"], "SocketHeadCapScrew");
        assert_eq!(json["standard"], "iso4762");
        assert_eq!(json["size"], "M6-1");
        assert_eq!(json["length_mm"], 20.0);
        assert_eq!(json["simple"], true);
    }
}
