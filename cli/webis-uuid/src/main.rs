//! webis-uuid - derive the UUID of a web corpus record.
//!
//! Usage: `webis-uuid PREFIX INTERNAL_ID`
//!
//! Prints the version 5 UUID of `PREFIX:INTERNAL_ID` in the URL namespace.
//! Both arguments are taken literally, including values such as `-h` or `--`.

use std::ffi::OsString;
use std::io::{self, Write};
use std::iter;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

mod error;
mod logging;

use error::CliError;

/// Derive a name-based UUID for a corpus record.
#[derive(Debug, Parser)]
#[command(name = "webis-uuid")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// PREFIX and INTERNAL_ID, e.g. `clueweb12 clueweb12-0200wb-93-16911`.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

impl Cli {
    /// Parses `argv` with every argument after the binary name treated as a value.
    fn parse_literal<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::<OsString>::into);
        let bin = argv.next().unwrap_or_else(|| OsString::from("webis-uuid"));

        // A leading escape ends option parsing, so later `--` tokens are values too.
        Self::try_parse_from(iter::once(bin).chain(iter::once(OsString::from("--"))).chain(argv))
    }

    /// Returns `(prefix, internal_id)`; anything but exactly two arguments is an error.
    fn record_name(&self) -> Result<(&str, &str), CliError> {
        match self.args.as_slice() {
            [prefix, internal_id] => Ok((prefix.as_str(), internal_id.as_str())),
            _ => Err(CliError::MissingArguments),
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let cli = match Cli::parse_literal(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            debug!(kind = ?e.kind(), "argument parsing failed");
            let err = match e.kind() {
                ErrorKind::InvalidUtf8 => CliError::InvalidUtf8,
                _ => CliError::MissingArguments,
            };
            error::print_error(&err.into());
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (prefix, internal_id) = cli.record_name()?;
    let id = webis_uuid::derive(prefix, internal_id);
    debug!(prefix, internal_id, uuid = %id, "derived");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{id}").context("failed to write to stdout")?;
    Ok(())
}
