//! Shared building blocks for the isomatch workspace.

pub mod config;
pub mod constants;
pub mod error;
