//! Emblem CLI library.
//!
//! Command-line front end for the Emblem ranking and verification engine:
//! rank symbol files, inspect completeness statistics, run verification
//! providers, and follow merged consensus views.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
