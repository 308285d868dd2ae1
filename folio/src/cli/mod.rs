//! Command-line interface for folio
//!
//! This module contains CLI argument parsing

pub mod args;

pub use args::Args;
