//! CLI adapter for platconst.
//!
//! The binary prints the host's [`platconst_core::PlatformConstants`] as one
//! line on stdout. Diagnostics go to stderr through `tracing`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;

// Used by main.rs
use anyhow as _;
use tracing_subscriber as _;

pub mod error;
pub mod handlers;
pub mod parser;

pub use error::CliError;
pub use parser::Cli;
