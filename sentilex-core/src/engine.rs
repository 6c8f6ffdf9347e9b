// sentilex-core/src/engine.rs
//! Defines the core SentimentEngine trait.
//!
//! The `SentimentEngine` trait provides a pluggable interface for ways of
//! judging the polarity of a text. The CLI and the headless helpers only talk
//! to this trait, so a different engine can be dropped in without touching
//! them.
//!
//! License: MIT OR APACHE 2.0

use crate::lexicon::Lexicon;
use crate::sentiment::SentimentResult;
use crate::tally::LexicalTally;

/// A trait that defines the core functionality of a sentiment engine.
///
/// Engines are immutable once built and must be shareable across threads.
pub trait SentimentEngine: Send + Sync {
    /// Counts the lexicon hits in `text` without deriving a label.
    fn tally(&self, text: &str) -> LexicalTally;

    /// Classifies a single text. Never fails; empty input is neutral.
    fn classify(&self, text: &str) -> SentimentResult {
        self.tally(text).to_result()
    }

    /// Classifies a batch of inputs, returning one result per item in order.
    fn classify_batch(&self, texts: &[&str]) -> Vec<SentimentResult> {
        texts.iter().map(|text| self.classify(text)).collect()
    }

    /// Returns the word sets the engine matches against.
    fn lexicon(&self) -> &Lexicon;
}
