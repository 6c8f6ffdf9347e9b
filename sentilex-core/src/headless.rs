// sentilex-core/src/headless.rs
//! Convenience wrappers for one-shot, non-interactive classification.

use crate::engine::SentimentEngine;
use crate::engines::lexicon_engine::LexiconEngine;
use crate::sentiment::SentimentResult;

/// Classifies `text` with the built-in lexicon.
///
/// This is the primary entry point for callers that do not need a custom
/// lexicon. It never fails; empty input yields neutral with confidence 0.5.
pub fn classify(text: &str) -> SentimentResult {
    LexiconEngine::new().classify(text)
}
