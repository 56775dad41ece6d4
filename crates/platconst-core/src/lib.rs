//! Platform file-status and memory-mapping constants.
//!
//! The crate gathers a fixed set of OS-defined scalars (the layout of
//! `struct stat`, open access modes, mapping protection, advice and sharing
//! flags, and the `MAP_FAILED` sentinel) into a [`PlatformConstants`] record
//! and renders it as the single-line JSON object downstream code generators
//! consume.
//!
//! # Architecture Note
//!
//! Core owns the record, the [`ConstantsProbe`] port and the wire format.
//! The CLI adapter (`platconst-cli`) only wires a probe to stdout.

#![deny(unused_crate_dependencies)]

#[cfg(not(unix))]
compile_error!("platconst-core requires a unix target: stat, open and mmap constants are unavailable");

pub mod check;
pub mod error;
pub mod format;
pub mod probe;
pub mod record;

pub use check::Violation;
pub use error::{ConstantsError, ConstantsResult};
pub use probe::{ConstantsProbe, HostProbe};
pub use record::{Field, PlatformConstants};
