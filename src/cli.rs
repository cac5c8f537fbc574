//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `writer`.
#[derive(Debug, Parser)]
#[command(name = "writer", version, about = "Write a string to a file, tracing to the system log")]
pub struct Cli {
    /// Target file, created or truncated before writing.
    pub file: PathBuf,
    /// Text written to the file, verbatim.
    #[arg(allow_hyphen_values = true)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parses_file_and_text() {
        let cli = Cli::parse_from(["writer", "/tmp/f.txt", "hello world"]);
        assert_eq!(cli.file, Path::new("/tmp/f.txt"));
        assert_eq!(cli.text, "hello world");
    }

    #[test]
    fn rejects_missing_text() {
        let result = Cli::try_parse_from(["writer", "/tmp/f.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_text_starting_with_a_hyphen() {
        let cli = Cli::parse_from(["writer", "/tmp/f.txt", "-n"]);
        assert_eq!(cli.text, "-n");
    }

    #[test]
    fn rejects_extra_arguments() {
        let result = Cli::try_parse_from(["writer", "/tmp/f.txt", "hello", "extra"]);
        assert!(result.is_err());
    }
}
