//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and print results. No
//! business logic lives here.

use std::path::Path;

use crate::error::{CliError, CliResult, IoContext};

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod parse;

/// Read a user-supplied input file.
pub(crate) fn read_input(path: &Path) -> CliResult<String> {
    if !path.is_file() {
        return Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).io_context(|| format!("Failed to read '{}'", path.display()))
}
