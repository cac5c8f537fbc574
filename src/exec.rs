//! Synchronous execution of external commands.
//!
//! Three strategies are provided: running a command line through the
//! system shell, spawning a program directly, and spawning a program
//! with its standard output redirected into a file. Each one blocks the
//! calling thread until the child exits and collapses the outcome to a
//! single pass/fail answer. There is no retry and no timeout; a child
//! that never exits blocks the caller indefinitely.

use std::ffi::OsStr;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

/// Shell used by [`run_shell`].
const SHELL: &str = "/bin/sh";

/// Runs a command line through the system shell and waits for it.
///
/// The string is handed to `/bin/sh -c` verbatim, so pipes, redirection
/// and word splitting behave as they would at a prompt. Returns `true`
/// only when the shell could be spawned and the command exited normally
/// with status 0; a spawn failure, a signal death, and a non-zero exit
/// all collapse to `false`.
#[must_use]
pub fn run_shell(command_line: &str) -> bool {
    let status = Command::new(SHELL).arg("-c").arg(command_line).status();
    matches!(status, Ok(status) if status.success())
}

/// Spawns `program` directly with `args` and waits for it to exit.
///
/// No shell is involved: arguments are passed verbatim with no parsing,
/// globbing, or variable expansion. `program` must be an absolute path
/// — no `PATH` search is performed, and a relative path returns `false`
/// without spawning anything. A non-existent program also yields
/// `false` rather than an error or a hang.
#[must_use]
pub fn run_program<I, S>(program: &Path, args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    if !program.is_absolute() {
        return false;
    }
    let status = Command::new(program).args(args).status();
    matches!(status, Ok(status) if status.success())
}

/// Spawns `program` with standard output redirected into `output_path`.
///
/// The output file is created if absent and truncated if present. When
/// it cannot be opened the target program is never spawned and `false`
/// is returned. Everything else behaves exactly like [`run_program`];
/// the file handle is released on every path.
#[must_use]
pub fn run_program_to_file<I, S>(output_path: &Path, program: &Path, args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    if !program.is_absolute() {
        return false;
    }
    let output = match File::create(output_path) {
        Ok(file) => file,
        Err(_) => return false,
    };
    let status = Command::new(program)
        .args(args)
        .stdout(Stdio::from(output))
        .status();
    matches!(status, Ok(status) if status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_reports_success() {
        assert!(run_shell("true"));
    }

    #[test]
    fn shell_reports_nonzero_exit() {
        assert!(!run_shell("exit 7"));
    }

    #[test]
    fn shell_reports_missing_command() {
        assert!(!run_shell("/no/such/binary"));
    }

    #[test]
    fn program_runs_with_absolute_path() {
        assert!(run_program(Path::new("/bin/echo"), ["hello"]));
    }

    #[test]
    fn program_rejects_relative_path() {
        assert!(!run_program(Path::new("echo"), ["hello"]));
    }

    #[test]
    fn program_reports_missing_binary() {
        assert!(!run_program(Path::new("/no/such/binary"), Vec::<String>::new()));
    }

    #[test]
    fn program_reports_nonzero_exit() {
        assert!(!run_program(Path::new("/bin/sh"), ["-c", "exit 3"]));
    }
}
