//! Command handlers.
//!
//! Handlers are thin: take a probe and an output sink, delegate to
//! `platconst-core`, and report failures as [`crate::CliError`].

pub mod report;
