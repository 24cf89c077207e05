//! CLI command handlers

pub mod commands;

pub use commands::{lookup, resolve_layout, run, RunOutcome};
