//! Core module - fundamental types and pure resolution logic

pub mod config;
pub mod family;
pub mod index;
pub mod lexer;
pub mod size;
pub mod spec;
pub mod threads;

pub use config::Config;
pub use family::{classify, supported_pairs, Family, Standard};
pub use index::{ProviderError, SizeProvider, ValidSizeIndex};
pub use size::{SizeParseError, SizeToken};
pub use spec::{FastenerSpec, PartKind, SpecError};
pub use threads::BundledThreadTable;
