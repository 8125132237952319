//! Canonical metric thread size notation
//!
//! A size token is the string `M<major>-<pitch>`, e.g. `M6-1` or `M2-0.4`.
//! Majors and pitches render as integers when they have no fractional part,
//! otherwise as decimals with trailing zeros stripped, so the same physical
//! size always produces the same token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A canonical metric thread size (`M<major>-<pitch>`)
///
/// Tokens compare, hash and sort by their canonical string. A token is only
/// ever "valid" relative to a specific (family, standard) pair; the same
/// token may exist for one pair and not another.
#[derive(Debug, Clone)]
pub struct SizeToken {
    token: String,
    major: f64,
    pitch: f64,
}

impl SizeToken {
    /// Build a token from numeric major diameter and pitch (both in mm)
    pub fn new(major: f64, pitch: f64) -> Self {
        Self {
            token: format!("M{}-{}", format_dim(major), format_dim(pitch)),
            major,
            pitch,
        }
    }

    /// The hard-coded last-resort size used when nothing else validates
    pub fn fallback() -> Self {
        Self::new(6.0, 1.0)
    }

    /// The canonical string form, e.g. "M6-1"
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Major thread diameter in mm
    pub fn major(&self) -> f64 {
        self.major
    }

    /// Thread pitch in mm
    pub fn pitch(&self) -> f64 {
        self.pitch
    }
}

/// Render a dimension without a superfluous trailing `.0`
fn format_dim(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

impl PartialEq for SizeToken {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for SizeToken {}

impl PartialOrd for SizeToken {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SizeToken {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.token.cmp(&other.token)
    }
}

impl std::hash::Hash for SizeToken {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl FromStr for SizeToken {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rest = trimmed
            .strip_prefix(['m', 'M'])
            .ok_or_else(|| SizeParseError::MissingPrefix(trimmed.to_string()))?;

        let (major_str, pitch_str) = rest
            .split_once(['-', 'x', 'X', '×'])
            .ok_or_else(|| SizeParseError::MissingPitch(trimmed.to_string()))?;

        let major: f64 = major_str
            .trim()
            .parse()
            .map_err(|_| SizeParseError::InvalidNumber(major_str.trim().to_string()))?;
        let pitch: f64 = pitch_str
            .trim()
            .parse()
            .map_err(|_| SizeParseError::InvalidNumber(pitch_str.trim().to_string()))?;

        Ok(Self::new(major, pitch))
    }
}

impl Serialize for SizeToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.token)
    }
}

impl<'de> Deserialize<'de> for SizeToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing size tokens
#[derive(Debug, Error)]
pub enum SizeParseError {
    #[error("size '{0}' does not start with 'M'")]
    MissingPrefix(String),

    #[error("size '{0}' has no pitch (expected M<major>-<pitch>)")]
    MissingPitch(String),

    #[error("invalid number '{0}' in size")]
    InvalidNumber(String),
}
