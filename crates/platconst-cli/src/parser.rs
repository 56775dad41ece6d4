//! Top-level argument handling.
//!
//! The reporter takes no options. Every argument is collected and dropped so
//! that any invocation behaves like a bare one, including `--help` and
//! arguments that are not valid UTF-8.

use std::ffi::OsString;

use clap::Parser;

/// Command-line interface definition for the constants reporter.
#[derive(Debug, Parser)]
#[command(name = "platconst")]
#[command(about = "Print platform stat, open and mmap constants as one JSON line")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Accepted and ignored
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        hide = true
    )]
    pub ignored: Vec<OsString>,
}
