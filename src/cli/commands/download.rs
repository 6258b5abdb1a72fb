//! CLI implementation for `esp-bmgr download`

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, is_json, print_detail, print_success, print_warning};
use crate::config::defaults::{env, DEFAULT_TARGET};
use crate::config::settings::Settings;
use crate::core::download::{download_board_manager, DownloadOutcome};
use crate::infra::component_manager::PythonComponentManager;
use crate::infra::environment::{Environment, MemoryEnvironment};

/// Execute the download command
///
/// Missing prerequisites are reported as warnings; only a failing
/// component manager run is an error.
pub fn execute(project: &Path, settings: &Settings) -> Result<()> {
    let manager = PythonComponentManager::from_settings(settings);
    let target = settings.target.as_deref().unwrap_or(DEFAULT_TARGET);

    // Same child environment the idf.py hook hands to the component manager
    let mut environment = MemoryEnvironment::from_process();
    environment.set_var(env::TARGET, target);
    environment.set_var(env::UPDATING_DEPS, "1");

    let spinner = create_spinner("Downloading esp_board_manager...");
    let result = download_board_manager(project, &manager, &environment);
    spinner.finish_and_clear();
    let outcome = result.context("Failed to download esp_board_manager")?;

    if is_json() {
        let json = match &outcome {
            DownloadOutcome::Downloaded { managed_dir } => serde_json::json!({
                "status": "downloaded",
                "managed_dir": managed_dir,
                "target": target,
            }),
            DownloadOutcome::ManagerUnavailable => {
                serde_json::json!({ "status": "manager-unavailable" })
            }
            DownloadOutcome::NoManifest { main_dir } => {
                serde_json::json!({ "status": "no-manifest", "main_dir": main_dir })
            }
            DownloadOutcome::NoDependency { manifest } => {
                serde_json::json!({ "status": "no-dependency", "manifest": manifest })
            }
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    match outcome {
        DownloadOutcome::Downloaded { managed_dir } => {
            print_success(&format!(
                "Downloaded esp_board_manager into {}",
                managed_dir.display()
            ));
        }
        DownloadOutcome::ManagerUnavailable => {
            print_warning("idf-component-manager is not available, skipping download");
            print_detail("Install it with 'pip install idf-component-manager' or set ESP_BMGR_PYTHON");
        }
        DownloadOutcome::NoManifest { main_dir } => {
            print_warning(&format!("No idf_component.yml found in {}", main_dir.display()));
        }
        DownloadOutcome::NoDependency { manifest } => {
            print_warning(&format!(
                "esp_board_manager is not declared in {}",
                manifest.display()
            ));
        }
    }
    Ok(())
}
