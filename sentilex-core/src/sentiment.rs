//! Sentiment labels, classification results and confidence bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence reported when no lexicon word is found.
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Coarse polarity judgment of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// The outcome of classifying one text.
///
/// Serializes as `{"sentiment":"positive","confidence":1.0}`; the field order
/// is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Share of matched words belonging to the winning side, in `[0, 1]`.
    pub confidence: f64,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
        }
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

/// Human-facing bucket for a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceBand {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceBand::VeryHigh
        } else if confidence >= 0.6 {
            ConfidenceBand::High
        } else if confidence >= 0.4 {
            ConfidenceBand::Moderate
        } else if confidence >= 0.2 {
            ConfidenceBand::Low
        } else {
            ConfidenceBand::VeryLow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::VeryLow => "Very Low",
            ConfidenceBand::Low => "Low",
            ConfidenceBand::Moderate => "Moderate",
            ConfidenceBand::High => "High",
            ConfidenceBand::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_in_field_order() {
        let result = SentimentResult {
            sentiment: Sentiment::Positive,
            confidence: 1.0,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"sentiment":"positive","confidence":1.0}"#
        );
        assert_eq!(
            serde_json::to_string(&SentimentResult::neutral()).unwrap(),
            r#"{"sentiment":"neutral","confidence":0.5}"#
        );
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ConfidenceBand::from_confidence(1.0), ConfidenceBand::VeryHigh);
        assert_eq!(ConfidenceBand::from_confidence(0.8), ConfidenceBand::VeryHigh);
        assert_eq!(ConfidenceBand::from_confidence(0.75), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(0.5), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(0.2), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(0.0), ConfidenceBand::VeryLow);
    }

    #[test]
    fn test_band_serializes_as_label() {
        assert_eq!(serde_json::to_string(&ConfidenceBand::VeryHigh).unwrap(), r#""Very High""#);
        assert_eq!(ConfidenceBand::Moderate.to_string(), "Moderate");
    }
}
