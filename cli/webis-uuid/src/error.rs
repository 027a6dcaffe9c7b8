//! Error handling and display for the CLI.

use std::io::{self, Write};

use thiserror::Error;

/// Usage line printed with argument errors.
pub const USAGE: &str = "Usage: webis-uuid PREFIX INTERNAL_ID";

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing arguments!")]
    MissingArguments,

    #[error("Arguments must be valid UTF-8!")]
    InvalidUtf8,
}

/// Print an error to stderr.
pub fn print_error(err: &anyhow::Error) {
    // Nothing useful is left to do if stderr itself is gone
    let _ = write_error(&mut io::stderr().lock(), err);
}

/// Write `ERROR: <message>`, then the usage line or the cause chain.
fn write_error(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "ERROR: {}", err)?;

    // Argument errors are followed by the usage line
    if err.downcast_ref::<CliError>().is_some() {
        return writeln!(out, "{}", USAGE);
    }

    for cause in err.chain().skip(1) {
        writeln!(out, "  caused by: {}", cause)?;
    }
    Ok(())
}
