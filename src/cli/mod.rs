//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::settings::Settings;
use commands::Commands;

/// esp-bmgr - ESP board manager component resolver
///
/// Locates the esp_board_manager component of an ESP-IDF project and
/// exposes its idf.py extension actions.
#[derive(Parser, Debug)]
#[command(name = "esp-bmgr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// ESP-IDF project directory (defaults to the current directory)
    #[arg(long, global = true, env = "ESP_BMGR_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command and return the process exit code
    pub fn run(self, settings: &Settings) -> Result<i32> {
        let Some(command) = self.command else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(0);
        };

        let project = match self.project {
            Some(path) => path,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        command.run(&project, settings)
    }
}
