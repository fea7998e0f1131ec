//! eventdash_cli - terminal front end for the eventdash query engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod output;

pub use config::Config;
pub use error::{CliError, Result};
