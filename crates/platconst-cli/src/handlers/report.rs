//! Report command handler.
//!
//! Probes the platform and writes the constants record as a single line.
//! This is the whole job of the binary.

use std::io::Write;

use platconst_core::ConstantsProbe;
use tracing::debug;

use crate::CliError;

/// Execute the report.
///
/// Writes exactly one line (the record followed by `\n`) to `out` and
/// flushes it. Nothing else is ever written to `out`.
pub fn execute<W: Write>(probe: &dyn ConstantsProbe, out: W) -> Result<(), CliError> {
    let constants = probe.probe();
    debug!(?constants, "reporting platform constants");
    constants.write_line(out)?;
    Ok(())
}
