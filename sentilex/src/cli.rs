// sentilex/src/cli.rs
//! This file defines the command-line interface (CLI) for the sentilex application.

use clap::builder::OsStringValueParser;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Top-level CLI definition.
///
/// Running with no TEXT is valid and prints the missing-input payload.
#[derive(Parser, Debug)]
#[command(
    name = "sentilex",
    author = "SentiLex Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify the sentiment of a text using fixed word lists",
    long_about = "SentiLex counts positive and negative indicator words in a text and prints a coarse sentiment label (positive, negative or neutral) with a naive confidence score as a single line of JSON. Matching is case-insensitive and whole-token only: the text is split on whitespace and punctuation is not stripped.",
)]
pub struct Cli {
    /// The text to analyze. May start with `-` and need not be valid UTF-8.
    #[arg(
        value_name = "TEXT",
        allow_hyphen_values = true,
        value_parser = OsStringValueParser::new(),
        conflicts_with_all = ["input_file", "line_buffered"],
        help = "The text to analyze."
    )]
    pub text: Option<OsString>,

    /// Additional positional arguments are accepted and ignored.
    #[arg(value_name = "IGNORED", hide = true, value_parser = OsStringValueParser::new())]
    pub extra: Vec<OsString>,

    /// Read the text to analyze from a file.
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "line_buffered", help = "Classify the whole content of a file instead of TEXT.")]
    pub input_file: Option<PathBuf>,

    /// Classify stdin line by line.
    #[arg(long = "line-buffered", help = "Read stdin line by line and print one result per line.")]
    pub line_buffered: bool,

    /// Path to a custom lexicon file (YAML).
    #[arg(long, short = 'l', value_name = "FILE", env = "SENTILEX_LEXICON", help = "Path to a custom lexicon file (YAML).")]
    pub lexicon: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value = "json", help = "Select the output format.")]
    pub format: OutputFormat,

    /// Include the confidence band and raw counts in JSON output.
    #[arg(long, help = "Include the confidence band and word counts in JSON output.")]
    pub details: bool,

    /// Exit with a non-zero status when no text is provided.
    #[arg(long, help = "Exit with status 2 when no text is provided.")]
    pub strict: bool,

    /// Disable all logging.
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

/// Enum for selecting how results are printed.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// One compact JSON object per line.
    Json,
    /// A short human-readable summary.
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_parses() {
        let cli = Cli::try_parse_from(["sentilex"]).unwrap();
        assert!(cli.text.is_none());
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.strict);
    }

    #[test]
    fn test_extra_positionals_are_collected() {
        let cli = Cli::try_parse_from(["sentilex", "good movie", "ignored", "also ignored"]).unwrap();
        assert_eq!(cli.text, Some(OsString::from("good movie")));
        assert_eq!(cli.extra, vec![OsString::from("ignored"), OsString::from("also ignored")]);
    }

    #[test]
    fn test_text_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["sentilex", "-1 stars, terrible film", "--details"]).unwrap();
        assert_eq!(cli.text, Some(OsString::from("-1 stars, terrible film")));
        assert!(cli.details);
    }

    #[test]
    fn test_hyphen_text_after_separator() {
        let cli = Cli::try_parse_from(["sentilex", "--details", "--", "-bad start"]).unwrap();
        assert_eq!(cli.text, Some(OsString::from("-bad start")));
        assert!(cli.details);
    }

    #[cfg(unix)]
    #[test]
    fn test_text_accepts_invalid_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"great \xff movie");
        let cli = Cli::try_parse_from([OsStr::new("sentilex"), raw]).unwrap();
        assert_eq!(cli.text.as_deref(), Some(raw));
    }

    #[test]
    fn test_text_conflicts_with_input_file() {
        assert!(Cli::try_parse_from(["sentilex", "good", "--input-file", "review.txt"]).is_err());
    }
}
