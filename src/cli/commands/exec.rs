//! CLI implementation for `esp-bmgr exec`
//!
//! Runs the board manager hook against the given `idf.py` command line and
//! then runs the command with the resulting environment.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use crate::config::settings::Settings;
use crate::core::hook::{HookContext, HookOutcome, HostHook, Invocation};
use crate::infra::component_manager::PythonComponentManager;
use crate::infra::environment::{Environment, MemoryEnvironment};

/// Execute the exec command, returning the child's exit code
pub fn execute(project: &Path, settings: &Settings, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        anyhow::bail!("No command given");
    };

    let manager = PythonComponentManager::from_settings(settings);
    let mut environment = MemoryEnvironment::from_process();
    let mut hook = HookContext::new(project, &manager);

    let outcome = hook
        .on_actions_loading(&Invocation::new(command.iter().cloned()), &mut environment)
        .context("Board manager hook failed")?;
    match &outcome {
        HookOutcome::Wired { path, provenance } => {
            tracing::info!("Using esp_board_manager from {} ({provenance})", path.display());
        }
        HookOutcome::Unresolved => {
            tracing::warn!("esp_board_manager not found, running without its actions");
        }
        other => tracing::debug!("Hook outcome: {other:?}"),
    }

    let mut child = Command::new(program);
    child.args(args).current_dir(project);
    environment.apply_to(&mut child);

    let status = child
        .status()
        .with_context(|| format!("Failed to run {program}"))?;
    Ok(status.code().unwrap_or(1))
}
