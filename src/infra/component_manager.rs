//! IDF component manager integration
//!
//! The component manager is a Python package (`idf-component-manager`).
//! It is driven through the Python interpreter with a small inline program
//! that calls its project-dependency downloader.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::settings::Settings;
use crate::error::DownloadError;
use crate::infra::environment::Environment;

/// Imports every module the downloader needs; exits non-zero otherwise
const PROBE_PROGRAM: &str = "\
import idf_component_manager.dependencies
import idf_component_tools.manager
import idf_component_tools.utils
";

/// Downloads the dependencies of one manifest directory
///
/// Arguments: manifest directory, lock file, managed components directory.
const DOWNLOAD_PROGRAM: &str = "\
import sys
from idf_component_manager.dependencies import download_project_dependencies
from idf_component_tools.manager import ManifestManager
from idf_component_tools.utils import ProjectRequirements
manifest = ManifestManager(sys.argv[1], 'temp').load()
download_project_dependencies(ProjectRequirements([manifest]), sys.argv[2], sys.argv[3])
";

/// Paths and environment handed to the component manager for a single download
#[derive(Clone, Copy)]
pub struct DownloadRequest<'a> {
    /// Directory containing the synthetic `idf_component.yml`
    pub manifest_dir: &'a Path,
    /// Project lock file
    pub lock_path: &'a Path,
    /// Directory the component lands in
    pub managed_dir: &'a Path,
    /// Environment of the caller; its changes (chip target, download
    /// guard) are exported to the component manager
    pub environment: &'a dyn Environment,
}

/// External dependency manager able to fetch managed components
pub trait ComponentManager {
    /// Whether the manager is installed and importable
    fn is_available(&self) -> bool;

    /// Download the dependencies described by the request
    fn download(&self, request: &DownloadRequest<'_>) -> Result<(), DownloadError>;
}

/// Component manager reached through a Python interpreter
#[derive(Debug, Clone)]
pub struct PythonComponentManager {
    python: Option<PathBuf>,
}

impl PythonComponentManager {
    /// Use an explicit interpreter
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: Some(python.into()),
        }
    }

    /// Pick the interpreter from settings, falling back to `python3` or
    /// `python` on `PATH`
    pub fn from_settings(settings: &Settings) -> Self {
        let python = settings
            .python
            .clone()
            .or_else(|| which::which("python3").ok())
            .or_else(|| which::which("python").ok());
        Self { python }
    }

    /// Interpreter in use, if one was found
    pub fn python(&self) -> Option<&Path> {
        self.python.as_deref()
    }
}

impl ComponentManager for PythonComponentManager {
    fn is_available(&self) -> bool {
        let Some(python) = &self.python else {
            tracing::debug!("No Python interpreter found");
            return false;
        };

        match Command::new(python).args(["-c", PROBE_PROGRAM]).output() {
            Ok(output) => output.status.success(),
            Err(e) => {
                tracing::debug!("Failed to run {}: {}", python.display(), e);
                false
            }
        }
    }

    fn download(&self, request: &DownloadRequest<'_>) -> Result<(), DownloadError> {
        let python = self.python.clone().unwrap_or_else(|| PathBuf::from("python3"));

        let mut command = Command::new(&python);
        command
            .args(["-c", DOWNLOAD_PROGRAM])
            .arg(request.manifest_dir)
            .arg(request.lock_path)
            .arg(request.managed_dir);
        request.environment.apply_to(&mut command);

        tracing::debug!("Running component manager with {}", python.display());
        let output = command.output().map_err(|e| DownloadError::Spawn {
            program: python.clone(),
            error: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            tracing::debug!("{}", stdout.trim_end());
        }

        if !output.status.success() {
            return Err(DownloadError::ManagerFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
