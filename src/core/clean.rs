//! Generated board code cleanup
//!
//! `gen-bmgr-config` writes board sources into `components/gen_bmgr_codes`.
//! They depend on the chip target, so they are dropped whenever the target
//! changes or a fresh board manager is about to be downloaded.

use std::path::{Path, PathBuf};

use crate::config::defaults::{COMPONENTS_DIR, GENERATED_CODE_DIR};
use crate::infra::filesystem;

/// Location of the generated board code
pub fn generated_code_dir(project: &Path) -> PathBuf {
    project.join(COMPONENTS_DIR).join(GENERATED_CODE_DIR)
}

/// Remove the generated board code
///
/// Absence and removal failures are ignored. Returns whether the directory
/// existed and is now gone.
pub fn remove_generated_code(project: &Path) -> bool {
    let dir = generated_code_dir(project);
    if !dir.exists() {
        return false;
    }

    match filesystem::remove_dir_all(&dir) {
        Ok(()) => {
            tracing::debug!("Removed {}", dir.display());
            true
        }
        Err(e) => {
            tracing::debug!("{}", e);
            false
        }
    }
}
