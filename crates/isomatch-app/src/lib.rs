//! Demonstration harness for the ISO 8601 matcher.
//!
//! Builds sample inputs, runs them through the matcher and renders one
//! report line per input.

pub mod cli;
pub mod error;
pub mod harness;
pub mod report;
