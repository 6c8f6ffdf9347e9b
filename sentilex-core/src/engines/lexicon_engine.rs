// sentilex-core/src/engines/lexicon_engine.rs
//! Word-list engine: counts positive and negative indicator words.

use log::debug;
use std::borrow::Cow;

use crate::engine::SentimentEngine;
use crate::lexicon::Lexicon;
use crate::sentiment::SentimentResult;
use crate::tally::LexicalTally;

/// Classifies text by counting whole-token matches against a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconEngine {
    lexicon: Cow<'static, Lexicon>,
}

impl LexiconEngine {
    /// Creates an engine over the built-in word sets.
    pub fn new() -> Self {
        Self {
            lexicon: Cow::Borrowed(Lexicon::builtin()),
        }
    }

    /// Creates an engine over a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Cow::Owned(lexicon),
        }
    }
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentEngine for LexiconEngine {
    fn tally(&self, text: &str) -> LexicalTally {
        let tally = LexicalTally::count(text, &self.lexicon);
        debug!(
            "Tallied {} positive and {} negative matches over {} bytes.",
            tally.positive_count,
            tally.negative_count,
            text.len()
        );
        tally
    }

    fn classify(&self, text: &str) -> SentimentResult {
        let result = self.tally(text).to_result();
        debug!("Classified input as {} ({}).", result.sentiment, result.confidence);
        result
    }

    fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
