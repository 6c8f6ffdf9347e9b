//! # SentiLex Core Library
//!
//! `sentilex-core` provides the platform-independent logic for judging the
//! sentiment of a piece of text by counting words from two fixed word lists.
//! It defines the lexicon, the per-input tally, the result types, and a
//! pluggable `SentimentEngine` trait.
//!
//! The library is pure and stateless: classification performs no I/O and
//! cannot fail. The only fallible operations are building or loading a
//! custom lexicon.
//!
//! ## Modules
//!
//! * `lexicon`: The built-in word sets, custom lexicon loading and validation.
//! * `tally`: Whitespace tokenization and counting of lexicon hits.
//! * `sentiment`: `Sentiment`, `SentimentResult` and `ConfidenceBand`.
//! * `engine`: Defines the `SentimentEngine` trait.
//! * `engines`: Concrete implementations of the `SentimentEngine` trait.
//! * `headless`: One-shot classification with the built-in lexicon.
//! * `errors`: The `SentiLexError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use sentilex_core::{classify, Sentiment};
//!
//! let result = classify("This movie was great and amazing");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! assert_eq!(result.confidence, 1.0);
//!
//! // A tie falls to negative.
//! let result = classify("This movie was good but also bad");
//! assert_eq!(result.sentiment, Sentiment::Negative);
//! assert_eq!(result.confidence, 0.5);
//! ```
//!
//! ## Error Handling
//!
//! Lexicon construction reports problems through [`SentiLexError`]; file
//! loading returns `anyhow::Error` with the file path attached as context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod lexicon;
pub mod sentiment;
pub mod tally;

/// Re-exports the custom error type for clear error reporting.
pub use errors::SentiLexError;

/// Re-exports the engine trait and its word-list implementation.
pub use engine::SentimentEngine;
pub use engines::lexicon_engine::LexiconEngine;

/// Re-exports lexicon types and loaders.
pub use lexicon::{
    load_lexicon,
    merge_lexicon,
    Lexicon,
    LexiconConfig,
    Polarity,
    NEGATIVE_WORDS,
    POSITIVE_WORDS,
};

/// Re-exports result types.
pub use sentiment::{ConfidenceBand, Sentiment, SentimentResult, NEUTRAL_CONFIDENCE};
pub use tally::LexicalTally;

/// Re-exports the one-shot classifier.
pub use headless::classify;
