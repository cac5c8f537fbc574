//! Core library entry for the `writer` CLI and the command-execution helpers.

pub mod cli;
pub mod exec;
pub mod logging;
pub mod writer;

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

/// Why a `writer` run failed.
#[derive(Debug)]
pub enum Failure {
    /// Argument parsing failed. Holds the rendered usage/error text the
    /// binary prints to stderr; the count mismatch is also journaled.
    Usage(String),
    /// Creating, writing, or flushing the file failed. The OS error has
    /// been journaled; nothing is printed to stderr.
    Write(String),
}

/// Run the `writer` CLI with the provided arguments.
///
/// # Errors
///
/// Returns [`Failure::Usage`] when argument parsing fails and
/// [`Failure::Write`] when the file cannot be written; either failure
/// has already been journaled by the time it is returned.
pub fn run<I, T>(args: I) -> Result<(), Failure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut journal = logging::Journal::connect();

    match cli::Cli::try_parse_from(&args) {
        Ok(cli) => {
            writer::run(&mut journal, &cli.file, &cli.text).map_err(Failure::Write)
        }
        Err(err) => {
            if !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                journal.error(&format!(
                    "Incorrect number of arguments: expected 2, got {}",
                    args.len().saturating_sub(1)
                ));
            }
            Err(Failure::Usage(err.to_string()))
        }
    }
}
