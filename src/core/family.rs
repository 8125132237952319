//! Fastener families, dimensional standards, and the free-text classifier
//!
//! Families and standards form a closed set; adding one means adding a
//! classifier rule here, a thread table entry in `data/`, and a kind code in
//! the vendor key builder.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fastener shape category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Family {
    SocketHeadCapScrew,
    HexHeadScrew,
    CounterSunkScrew,
    PanHeadScrew,
    HexNut,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::SocketHeadCapScrew => "SocketHeadCapScrew",
            Family::HexHeadScrew => "HexHeadScrew",
            Family::CounterSunkScrew => "CounterSunkScrew",
            Family::PanHeadScrew => "PanHeadScrew",
            Family::HexNut => "HexNut",
        }
    }

    /// Whether this family is a screw shape (as opposed to a nut)
    pub fn is_screw(&self) -> bool {
        !matches!(self, Family::HexNut)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "socketheadcapscrew" => Ok(Family::SocketHeadCapScrew),
            "hexheadscrew" => Ok(Family::HexHeadScrew),
            "countersunkscrew" => Ok(Family::CounterSunkScrew),
            "panheadscrew" => Ok(Family::PanHeadScrew),
            "hexnut" => Ok(Family::HexNut),
            _ => Err(format!(
                "Unknown family: {}. Use SocketHeadCapScrew, HexHeadScrew, CounterSunkScrew, PanHeadScrew, or HexNut",
                s
            )),
        }
    }
}

/// Dimensional standard a family conforms to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standard {
    Iso4762,
    Iso4017,
    Iso10642,
    Iso1580,
    Iso4032,
}

impl Standard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::Iso4762 => "iso4762",
            Standard::Iso4017 => "iso4017",
            Standard::Iso10642 => "iso10642",
            Standard::Iso1580 => "iso1580",
            Standard::Iso4032 => "iso4032",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Standard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iso4762" => Ok(Standard::Iso4762),
            "iso4017" => Ok(Standard::Iso4017),
            "iso10642" => Ok(Standard::Iso10642),
            "iso1580" => Ok(Standard::Iso1580),
            "iso4032" => Ok(Standard::Iso4032),
            _ => Err(format!(
                "Unknown standard: {}. Use iso4762, iso4017, iso10642, iso1580, or iso4032",
                s
            )),
        }
    }
}

/// Every (family, standard) pair this crate knows how to size and source
pub fn supported_pairs() -> &'static [(Family, Standard)] {
    &[
        (Family::SocketHeadCapScrew, Standard::Iso4762),
        (Family::HexHeadScrew, Standard::Iso4017),
        (Family::CounterSunkScrew, Standard::Iso10642),
        (Family::PanHeadScrew, Standard::Iso1580),
        (Family::HexNut, Standard::Iso4032),
    ]
}

/// Ordered classifier rules; first match wins. Word-boundary patterns over
/// pre-lowercased text so that e.g. "panther" never matches "pan".
static FAMILY_RULES: Lazy<Vec<(Regex, Family, Standard)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"\bsocket\b|\bshcs\b|\bsocket head\b").unwrap(),
            Family::SocketHeadCapScrew,
            Standard::Iso4762,
        ),
        (
            Regex::new(r"\bhex\b|\bhex head\b|\bbolt\b").unwrap(),
            Family::HexHeadScrew,
            Standard::Iso4017,
        ),
        (
            Regex::new(r"\bcountersunk\b|\bflat head\b").unwrap(),
            Family::CounterSunkScrew,
            Standard::Iso10642,
        ),
        (
            Regex::new(r"\bpan head\b|\bpan\b").unwrap(),
            Family::PanHeadScrew,
            Standard::Iso1580,
        ),
    ]
});

/// Map free-text cues to a screw (family, standard) pair.
///
/// Total: returns (SocketHeadCapScrew, iso4762) when no rule matches.
/// Expects trimmed, lower-cased text.
pub fn classify(text: &str) -> (Family, Standard) {
    for (pattern, family, standard) in FAMILY_RULES.iter() {
        if pattern.is_match(text) {
            return (*family, *standard);
        }
    }
    (Family::SocketHeadCapScrew, Standard::Iso4762)
}
