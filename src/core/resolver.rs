//! Board manager component resolution
//!
//! Finds where the board manager component lives, in priority order:
//!
//! 1. the manifest's `override_path`
//! 2. a vendored copy under `components/`
//! 3. the component manager's copy under `managed_components/`
//!
//! Every step that finds nothing falls through to the next. Running out of
//! steps is a normal result meaning the component has to be downloaded.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::{
    COMPONENTS_DIR, COMPONENT_MARKERS, MAIN_DIR, MANAGED_COMPONENTS_DIR, MANAGED_NAME,
    VENDORED_NAMES,
};
use crate::core::manifest;
use crate::infra::filesystem::normalize;

/// Where a resolved component came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Manifest `override_path`
    Override,
    /// Vendored copy under `components/`
    Vendored,
    /// Downloaded copy under `managed_components/`
    Managed,
    /// Nothing found
    NotFound,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::Vendored => write!(f, "vendored"),
            Self::Managed => write!(f, "managed"),
            Self::NotFound => write!(f, "not-found"),
        }
    }
}

/// Result of resolving the board manager component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Found through the manifest `override_path`
    Override(PathBuf),
    /// Found under `components/`
    Vendored(PathBuf),
    /// Found under `managed_components/`
    Managed(PathBuf),
    /// Not present locally
    NotFound,
}

impl Resolution {
    /// Component directory, if one was found
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Override(path) | Self::Vendored(path) | Self::Managed(path) => Some(path),
            Self::NotFound => None,
        }
    }

    /// Provenance tag
    pub fn provenance(&self) -> Provenance {
        match self {
            Self::Override(_) => Provenance::Override,
            Self::Vendored(_) => Provenance::Vendored,
            Self::Managed(_) => Provenance::Managed,
            Self::NotFound => Provenance::NotFound,
        }
    }

    /// Whether the component is present
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Check whether `path` is a board manager component directory
///
/// The directory must exist and contain `idf_ext.py` or `idf_component.yml`.
pub fn is_board_manager_component(path: &Path) -> bool {
    path.is_dir() && COMPONENT_MARKERS.iter().any(|marker| path.join(marker).exists())
}

/// Turn a manifest `override_path` into an absolute, normalized path
///
/// - absolute paths are used as-is
/// - `../...` is relative to `main/`, where the manifest lives
/// - `components/...` is relative to the project root
/// - anything else is relative to `components/`
pub fn resolve_override_path(project: &Path, override_path: &str) -> PathBuf {
    let raw = Path::new(override_path);
    let joined = if raw.is_absolute() {
        raw.to_path_buf()
    } else if override_path.starts_with("../") {
        project.join(MAIN_DIR).join(raw)
    } else if override_path.starts_with("components/") {
        project.join(raw)
    } else {
        project.join(COMPONENTS_DIR).join(raw)
    };
    normalize(&joined)
}

/// Component named by the manifest `override_path`, if it is valid
pub fn find_override(project: &Path) -> Option<PathBuf> {
    let dependency = manifest::project_board_manager(project)?;
    let override_path = dependency.spec.override_path()?;

    let path = resolve_override_path(project, override_path);
    if is_board_manager_component(&path) {
        tracing::debug!("Found local board manager via override_path: {}", path.display());
        Some(path)
    } else {
        tracing::debug!(
            "Ignoring override_path '{}': {} is not a board manager component",
            override_path,
            path.display()
        );
        None
    }
}

/// Vendored component under `components/`, if any
pub fn find_vendored(project: &Path) -> Option<PathBuf> {
    let components = project.join(COMPONENTS_DIR);
    if !components.is_dir() {
        return None;
    }

    let path = VENDORED_NAMES
        .iter()
        .map(|name| components.join(name))
        .find(|path| is_board_manager_component(path))?;
    tracing::debug!("Found local board manager in components: {}", path.display());
    Some(normalize(&path))
}

/// Local component: override first, then vendored
pub fn find_local(project: &Path) -> Resolution {
    if let Some(path) = find_override(project) {
        return Resolution::Override(path);
    }
    if let Some(path) = find_vendored(project) {
        return Resolution::Vendored(path);
    }
    Resolution::NotFound
}

/// Where the component manager places the board manager
///
/// This is a location, not a finding; callers check that it exists.
pub fn managed_component_path(project: &Path) -> PathBuf {
    project.join(MANAGED_COMPONENTS_DIR).join(MANAGED_NAME)
}

/// Resolve the board manager component of a project
pub fn resolve(project: &Path) -> Resolution {
    let local = find_local(project);
    if local.is_found() {
        return local;
    }

    let managed = managed_component_path(project);
    if managed.exists() {
        return Resolution::Managed(normalize(&managed));
    }

    Resolution::NotFound
}
