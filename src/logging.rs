//! System-log journal for the `writer` binary.

use syslog::{Facility, Formatter3164, Logger, LoggerBackend};

/// Identifier every journal entry is tagged with.
pub const IDENT: &str = "writer";

/// Severity-tagged handle on the OS system log.
///
/// Entries carry the [`IDENT`] tag and the current process id so they
/// can be correlated in the system journal later. A failure to reach
/// the syslog socket does not fail the program: the journal degrades to
/// a silent sink and the caller's work proceeds. The underlying socket
/// is released when the journal is dropped.
pub struct Journal {
    inner: Option<Logger<LoggerBackend, Formatter3164>>,
}

impl Journal {
    /// Connects to the local syslog daemon under [`IDENT`].
    #[must_use]
    pub fn connect() -> Self {
        let formatter = Formatter3164 {
            facility: Facility::LOG_USER,
            hostname: None,
            process: IDENT.to_string(),
            pid: std::process::id(),
        };
        Self { inner: syslog::unix(formatter).ok() }
    }

    /// Records an error-level entry.
    pub fn error(&mut self, message: &str) {
        if let Some(log) = self.inner.as_mut() {
            let _ = log.err(message);
        }
    }

    /// Records a debug-level entry.
    pub fn debug(&mut self, message: &str) {
        if let Some(log) = self.inner.as_mut() {
            let _ = log.debug(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Journal;

    #[test]
    fn journal_tolerates_missing_syslog_socket() {
        // Whether or not a syslog daemon is running, logging must not panic.
        let mut journal = Journal::connect();
        journal.debug("journal smoke test");
        journal.error("journal smoke test");
    }
}
