//! Board manager download
//!
//! Hands a one-dependency manifest to the component manager so that only
//! the board manager is fetched into `managed_components/`.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::defaults::{LOCK_FILE, MAIN_DIR, MANAGED_COMPONENTS_DIR, SYNTHETIC_MANIFEST};
use crate::core::manifest::{self, ManifestDocument};
use crate::error::{DownloadError, FilesystemError};
use crate::infra::component_manager::{ComponentManager, DownloadRequest};
use crate::infra::environment::Environment;
use crate::infra::filesystem;

/// How a download request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Component manager ran successfully
    Downloaded {
        /// Directory the component was downloaded into
        managed_dir: PathBuf,
    },
    /// Component manager is not installed
    ManagerUnavailable,
    /// Project has no manifest under `main/`
    NoManifest {
        /// Directory that was searched
        main_dir: PathBuf,
    },
    /// Manifest does not declare the board manager
    NoDependency {
        /// Manifest that was read
        manifest: PathBuf,
    },
}

/// Download the board manager declared by the project manifest
///
/// Missing prerequisites (component manager, manifest, dependency entry)
/// are reported as outcomes, not errors. Only a failure of the component
/// manager itself is returned as `Err`. The component manager runs with
/// the changes recorded in `environment`.
pub fn download_board_manager(
    project: &Path,
    manager: &dyn ComponentManager,
    environment: &dyn Environment,
) -> Result<DownloadOutcome, DownloadError> {
    if !manager.is_available() {
        tracing::warn!("idf-component-manager is not available, cannot download component");
        return Ok(DownloadOutcome::ManagerUnavailable);
    }

    let main_dir = project.join(MAIN_DIR);
    let Some(manifest_path) = manifest::find_manifest(project) else {
        tracing::warn!(
            "Manifest file not found at {}/idf_component.yml or {}/idf_component.yaml",
            main_dir.display(),
            main_dir.display()
        );
        return Ok(DownloadOutcome::NoManifest { main_dir });
    };

    let managed_dir = project.join(MANAGED_COMPONENTS_DIR);
    filesystem::create_dir_all(&managed_dir)?;

    let dependencies = manifest::dependencies_or_empty(&manifest_path);
    let Some(dependency) = manifest::find_board_manager(&dependencies) else {
        tracing::warn!(
            "esp_board_manager dependency not found in {}",
            manifest_path.display()
        );
        return Ok(DownloadOutcome::NoDependency {
            manifest: manifest_path,
        });
    };

    tracing::info!(
        "Start downloading esp_board_manager component to {}",
        managed_dir.display()
    );

    let scratch = TempDir::new().map_err(|e| FilesystemError::CreateDir {
        path: std::env::temp_dir(),
        error: e.to_string(),
    })?;
    let synthetic = ManifestDocument::single(&dependency.key, dependency.spec);
    let yaml = synthetic
        .to_yaml()
        .map_err(|e| DownloadError::Serialize(e.to_string()))?;
    filesystem::write_file(&scratch.path().join(SYNTHETIC_MANIFEST), &yaml)?;

    let lock_path = project.join(LOCK_FILE);
    manager.download(&DownloadRequest {
        manifest_dir: scratch.path(),
        lock_path: &lock_path,
        managed_dir: &managed_dir,
        environment,
    })?;

    tracing::info!(
        "Successfully downloaded esp_board_manager component to {}",
        managed_dir.display()
    );
    Ok(DownloadOutcome::Downloaded { managed_dir })
}
