//! Command implementations.

pub mod classify;
