//! errors.rs - Custom error types for the sentilex-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `sentilex-core` library.
///
/// Classification itself never fails; every variant here comes from building
/// or loading a lexicon.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SentiLexError {
    #[error("Lexicon validation failed:\n{}", .0.join("\n"))]
    InvalidLexicon(Vec<String>),

    #[error("Failed to parse lexicon: {0}")]
    ParseError(#[from] serde_yml::Error),
}
