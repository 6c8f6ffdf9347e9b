// sentilex/src/ui/output_format.rs
//! Serialization of results for stdout.
//!
//! Every write produces exactly one line. JSON is compact, and the field order
//! of each payload struct is the field order on the wire.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use sentilex_core::{ConfidenceBand, LexicalTally, Sentiment, SentimentResult};

/// Message reported when there is nothing to classify.
pub const MISSING_INPUT_MESSAGE: &str = "No text provided";

/// The error object printed in place of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload<'a> {
    pub error: &'a str,
}

impl ErrorPayload<'static> {
    pub fn missing_input() -> Self {
        Self {
            error: MISSING_INPUT_MESSAGE,
        }
    }
}

/// A result extended with its band and the counts it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub band: ConfidenceBand,
    pub positive_count: usize,
    pub negative_count: usize,
}

impl DetailedResult {
    pub fn new(result: SentimentResult, tally: &LexicalTally) -> Self {
        Self {
            sentiment: result.sentiment,
            confidence: result.confidence,
            band: result.band(),
            positive_count: tally.positive_count,
            negative_count: tally.negative_count,
        }
    }
}

/// Writes `value` as compact JSON followed by a newline.
pub fn write_json_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    let line = serde_json::to_string(value).context("Failed to serialize output")?;
    writeln!(writer, "{}", line).context("Failed to write output")?;
    Ok(())
}

/// Writes a human-readable summary such as `positive (confidence 1.00, Very High)`.
pub fn write_text_line<W: Write>(writer: &mut W, result: &SentimentResult, supports_color: bool) -> Result<()> {
    let label = result.sentiment.to_string();
    let label = if supports_color {
        match result.sentiment {
            Sentiment::Positive => label.green().bold().to_string(),
            Sentiment::Negative => label.red().bold().to_string(),
            Sentiment::Neutral => label.dimmed().to_string(),
        }
    } else {
        label
    };
    writeln!(
        writer,
        "{} (confidence {:.2}, {})",
        label,
        result.confidence,
        result.band()
    )
    .context("Failed to write output")?;
    Ok(())
}

/// Writes the missing-input message in text form.
pub fn write_text_error<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> Result<()> {
    let prefix = if supports_color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };
    writeln!(writer, "{} {}", prefix, message).context("Failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentilex_core::classify;

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_missing_input_payload() {
        let out = render(|w| write_json_line(w, &ErrorPayload::missing_input()));
        assert_eq!(out, "{\"error\":\"No text provided\"}\n");
    }

    #[test]
    fn test_detailed_result_field_order() {
        let result = classify("good good good bad");
        let tally = LexicalTally {
            positive_count: 3,
            negative_count: 1,
        };
        let out = render(|w| write_json_line(w, &DetailedResult::new(result, &tally)));
        assert_eq!(
            out,
            "{\"sentiment\":\"positive\",\"confidence\":0.75,\"band\":\"High\",\"positive_count\":3,\"negative_count\":1}\n"
        );
    }

    #[test]
    fn test_text_line_without_color() {
        let out = render(|w| write_text_line(w, &classify("great"), false));
        assert_eq!(out, "positive (confidence 1.00, Very High)\n");
        let out = render(|w| write_text_line(w, &classify(""), false));
        assert_eq!(out, "neutral (confidence 0.50, Moderate)\n");
    }

    #[test]
    fn test_text_line_with_color_keeps_content() {
        let out = render(|w| write_text_line(w, &classify("awful"), true));
        let plain = String::from_utf8(strip_ansi_escapes::strip(out.as_bytes())).unwrap();
        assert_eq!(plain, "negative (confidence 1.00, Very High)\n");
    }
}
