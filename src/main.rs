//! Binary entrypoint for the `writer` CLI.

use std::process::ExitCode;

use scribe::Failure;

fn main() -> ExitCode {
    match scribe::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Usage(message)) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        // Write failures go to the system log only, never to stderr.
        Err(Failure::Write(_)) => ExitCode::FAILURE,
    }
}
