//! Classify command implementation.
//!
//! Resolves the input (positional text, file, or stdin lines), runs the engine
//! and writes one output line per classified text.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::borrow::Cow;
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use sentilex_core::SentimentEngine;

use crate::cli::OutputFormat;
use crate::ui::output_format::{self, DetailedResult, ErrorPayload, MISSING_INPUT_MESSAGE};

/// Options for a single classify run.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub text: Option<String>,
    pub input_file: Option<PathBuf>,
    pub line_buffered: bool,
    pub format: OutputFormat,
    pub details: bool,
}

/// What a run ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given number of texts were classified.
    Classified(usize),
    /// No text was available; the error payload was printed instead.
    MissingInput,
}

/// The main operation runner for the sentilex CLI.
///
/// `input` is only read in line-buffered mode.
pub fn run_classify<R: BufRead, W: Write>(
    engine: &dyn SentimentEngine,
    opts: &ClassifyOptions,
    input: R,
    writer: &mut W,
    supports_color: bool,
) -> Result<Outcome> {
    info!("Starting classify operation.");

    let outcome = if opts.line_buffered {
        classify_lines(engine, opts, input, writer, supports_color)?
    } else {
        match resolve_text(opts)? {
            Some(text) => {
                emit_result(engine, opts, &text, writer, supports_color)?;
                Outcome::Classified(1)
            }
            None => {
                info!("No text provided.");
                emit_missing_input(opts, writer, supports_color)?;
                Outcome::MissingInput
            }
        }
    };

    writer.flush().context("Failed to flush output")?;
    info!("Classify operation completed.");
    Ok(outcome)
}

fn resolve_text(opts: &ClassifyOptions) -> Result<Option<String>> {
    if let Some(text) = &opts.text {
        debug!("Using text from command line ({} bytes).", text.len());
        return Ok(Some(text.clone()));
    }
    if let Some(path) = &opts.input_file {
        debug!("Reading input from file: {}", path.display());
        let bytes = fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))?;
        return Ok(Some(decode_lossy(&bytes, "input file")));
    }
    Ok(None)
}

/// Decodes `bytes` as UTF-8, replacing invalid sequences with U+FFFD.
fn decode_lossy(bytes: &[u8], source: &str) -> String {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!("The {} is not valid UTF-8; invalid bytes were replaced with U+FFFD.", source);
    }
    text.into_owned()
}

fn classify_lines<R: BufRead, W: Write>(
    engine: &dyn SentimentEngine,
    opts: &ClassifyOptions,
    input: R,
    writer: &mut W,
    supports_color: bool,
) -> Result<Outcome> {
    debug!("Reading input from stdin line by line...");
    let mut count = 0;
    for line in input.split(b'\n') {
        let mut line = line.context("Failed to read line from stdin")?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let line = decode_lossy(&line, "stdin line");
        emit_result(engine, opts, &line, writer, supports_color)?;
        // One flush per line for streaming consumers.
        writer.flush().context("Failed to flush output")?;
        count += 1;
    }
    debug!("Classified {} lines.", count);
    Ok(Outcome::Classified(count))
}

fn emit_result<W: Write>(
    engine: &dyn SentimentEngine,
    opts: &ClassifyOptions,
    text: &str,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    match opts.format {
        OutputFormat::Json if opts.details => {
            let tally = engine.tally(text);
            let result = tally.to_result();
            output_format::write_json_line(writer, &DetailedResult::new(result, &tally))
        }
        OutputFormat::Json => output_format::write_json_line(writer, &engine.classify(text)),
        OutputFormat::Text => output_format::write_text_line(writer, &engine.classify(text), supports_color),
    }
}

fn emit_missing_input<W: Write>(opts: &ClassifyOptions, writer: &mut W, supports_color: bool) -> Result<()> {
    match opts.format {
        OutputFormat::Json => output_format::write_json_line(writer, &ErrorPayload::missing_input()),
        OutputFormat::Text => output_format::write_text_error(writer, MISSING_INPUT_MESSAGE, supports_color),
    }
}
