// sentilex/src/logger.rs
//! Logging setup for the sentilex binary.
//!
//! All log output goes to stderr so that stdout carries nothing but results.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger.
///
/// With `None`, `RUST_LOG` decides and defaults to `warn`. An explicit level
/// overrides `RUST_LOG`. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()));
    let _ = builder.try_init();
}
