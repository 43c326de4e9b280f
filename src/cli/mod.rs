//! Command-line interface module
//!
//! Handles argument parsing and subcommand definitions

pub mod args;

pub use args::*;
