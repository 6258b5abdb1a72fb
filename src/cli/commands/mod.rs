//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod clean;
pub mod doctor;
pub mod download;
pub mod env;
pub mod exec;
pub mod resolve;

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use crate::config::settings::Settings;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show where the board manager component resolves to
    Resolve,

    /// Print the IDF_EXTRA_ACTIONS_PATH export for the board manager
    Env,

    /// Download the board manager through the IDF component manager
    Download,

    /// Remove generated board code (components/gen_bmgr_codes)
    Clean,

    /// Check the project and the tools the board manager needs
    Doctor,

    /// Run idf.py with the board manager actions wired in
    Exec {
        /// idf.py and its arguments
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "IDF_PY_ARGS"
        )]
        command: Vec<String>,
    },
}

impl Commands {
    /// Execute the command against `project`, returning the exit code
    pub fn run(self, project: &Path, settings: &Settings) -> Result<i32> {
        match self {
            Self::Resolve => resolve::execute(project).map(|()| 0),
            Self::Env => env::execute(project).map(|()| 0),
            Self::Download => download::execute(project, settings).map(|()| 0),
            Self::Clean => clean::execute(project).map(|()| 0),
            Self::Doctor => doctor::execute(project, settings).map(|()| 0),
            Self::Exec { command } => exec::execute(project, settings, &command),
        }
    }
}
