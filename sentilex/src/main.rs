// sentilex/src/main.rs
//! SentiLex entry point.
//!
//! Parses arguments, sets up logging, builds the engine and runs the classify
//! command against stdin/stdout.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{info, warn};
use std::io;

use sentilex::cli::Cli;
use sentilex::logger;
use sentilex::{run_classify, ClassifyOptions, Outcome};
use sentilex_core::{load_lexicon, LexiconEngine};

/// Exit status used by `--strict` when there is nothing to classify.
const MISSING_INPUT_EXIT_CODE: i32 = 2;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    info!("sentilex started. Version: {}", env!("CARGO_PKG_VERSION"));

    if !args.extra.is_empty() {
        warn!("Ignoring {} extra positional argument(s); only the first is classified.", args.extra.len());
    }

    let engine = match args.lexicon.as_deref() {
        Some(path) => {
            let lexicon = load_lexicon(Some(path)).context("Failed to load lexicon")?;
            LexiconEngine::with_lexicon(lexicon)
        }
        None => LexiconEngine::new(),
    };

    let text = args.text.map(|raw| {
        let text = raw.to_string_lossy().into_owned();
        if raw.to_str().is_none() {
            warn!("TEXT is not valid UTF-8; invalid bytes were replaced with U+FFFD.");
        }
        text
    });

    let opts = ClassifyOptions {
        text,
        input_file: args.input_file,
        line_buffered: args.line_buffered,
        format: args.format,
        details: args.details,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    let outcome = run_classify(&engine, &opts, stdin.lock(), &mut writer, supports_color)?;

    if outcome == Outcome::MissingInput && args.strict {
        info!("Exiting with status {} (--strict).", MISSING_INPUT_EXIT_CODE);
        std::process::exit(MISSING_INPUT_EXIT_CODE);
    }

    Ok(())
}
