//! Concrete implementations of the `SentimentEngine` trait.
//!
//! Each engine lives in its own file within this directory and is declared
//! here with `pub mod <engine_name>;`.

pub mod lexicon_engine;
