//! Threadfit: fastener request resolution toolkit
//!
//! Turns informal requests like "M6 socket screw 20mm that fits a matching
//! nut" into fully-specified, catalog-valid fastener specs with vendor
//! sourcing and a warning trail for every substitution made.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod resolve;
