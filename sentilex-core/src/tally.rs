//! Word counting against a lexicon and the derivation of a label from counts.

use crate::lexicon::{Lexicon, Polarity};
use crate::sentiment::{Sentiment, SentimentResult};

/// Per-side counts of lexicon hits for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicalTally {
    pub positive_count: usize,
    pub negative_count: usize,
}

impl LexicalTally {
    /// Lowercases `text`, splits it on whitespace and counts exact matches.
    ///
    /// Punctuation is not stripped: `good.` does not match `good`.
    pub fn count(text: &str, lexicon: &Lexicon) -> Self {
        let lowered = text.to_lowercase();
        let mut tally = Self::default();

        for token in lowered.split_whitespace() {
            match lexicon.polarity_of(token) {
                Some(Polarity::Positive) => tally.positive_count += 1,
                Some(Polarity::Negative) => tally.negative_count += 1,
                None => {}
            }
        }

        tally
    }

    pub fn total(&self) -> usize {
        self.positive_count + self.negative_count
    }

    /// Derives the label and confidence from the counts.
    ///
    /// A tie between non-zero counts resolves to negative.
    pub fn to_result(&self) -> SentimentResult {
        let total = self.total();
        if total == 0 {
            return SentimentResult::neutral();
        }

        if self.positive_count > self.negative_count {
            SentimentResult {
                sentiment: Sentiment::Positive,
                confidence: self.positive_count as f64 / total as f64,
            }
        } else {
            SentimentResult {
                sentiment: Sentiment::Negative,
                confidence: self.negative_count as f64 / total as f64,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_ignores_case_and_unknown_tokens() {
        let tally = LexicalTally::count("Great plot, BAD acting, great music", Lexicon::builtin());
        assert_eq!(tally.positive_count, 2);
        assert_eq!(tally.negative_count, 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_count_splits_on_any_whitespace() {
        let tally = LexicalTally::count("good\tbad\n\nawful  ", Lexicon::builtin());
        assert_eq!(tally.positive_count, 1);
        assert_eq!(tally.negative_count, 2);
    }

    #[test]
    fn test_to_result_tie_is_negative() {
        let tally = LexicalTally {
            positive_count: 3,
            negative_count: 3,
        };
        let result = tally.to_result();
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_to_result_ratio() {
        let tally = LexicalTally {
            positive_count: 3,
            negative_count: 1,
        };
        let result = tally.to_result();
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence, 0.75);
    }
}
