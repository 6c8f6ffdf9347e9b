// sentilex/src/lib.rs
//! # SentiLex CLI Application
//!
//! This crate provides the command-line interface for the `sentilex-core`
//! sentiment engine: argument parsing, logging, input acquisition and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::classify::{run_classify, ClassifyOptions, Outcome};
