//! The write action behind the `writer` binary.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::logging::Journal;

/// Writes `text` to the file at `path`, journaling each step.
///
/// The file is created if absent and truncated if present; the contents
/// become exactly `text`, with no trailing newline and no escaping.
/// Parent directories are not created, so a target inside a missing
/// directory is an error.
///
/// # Errors
///
/// Returns an error string when the file cannot be created, written, or
/// flushed to disk. Every failure is recorded as an error-level journal
/// entry, with the underlying OS error, before it is returned.
pub fn run(journal: &mut Journal, path: &Path, text: &str) -> Result<(), String> {
    journal.debug(&format!("Writing {text} to {}", path.display()));

    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            let message = format!("Error opening file {}: {err}", path.display());
            journal.error(&message);
            return Err(message);
        }
    };

    if let Err(err) = file.write_all(text.as_bytes()) {
        let message = format!("Error writing file {}: {err}", path.display());
        journal.error(&message);
        return Err(message);
    }

    // Implicit close cannot report failure; flush to disk explicitly so
    // a late error still reaches the journal and the exit status.
    if let Err(err) = file.sync_all() {
        let message = format!("Error closing file {}: {err}", path.display());
        journal.error(&message);
        return Err(message);
    }

    Ok(())
}
