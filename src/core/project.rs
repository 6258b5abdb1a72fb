//! ESP-IDF project detection

use std::path::Path;

use crate::config::defaults::{PROJECT_DESCRIPTOR, PROJECT_MARKER};

/// Check whether `path` is the root of an ESP-IDF project
///
/// The root's `CMakeLists.txt` must include `project.cmake`. An unreadable
/// descriptor counts as "not a project".
pub fn is_project_root(path: &Path) -> bool {
    let descriptor = path.join(PROJECT_DESCRIPTOR);
    match std::fs::read_to_string(&descriptor) {
        Ok(content) => content.contains(PROJECT_MARKER),
        Err(e) => {
            tracing::debug!("No project descriptor at {}: {}", descriptor.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_with_marker() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("CMakeLists.txt"),
            "cmake_minimum_required(VERSION 3.16)\ninclude($ENV{IDF_PATH}/tools/cmake/project.cmake)\nproject(blink)\n",
        )
        .unwrap();

        assert!(is_project_root(dir.path()));
    }

    #[test]
    fn test_cmake_without_marker() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("CMakeLists.txt"), "idf_component_register(SRCS main.c)\n")
            .unwrap();

        assert!(!is_project_root(dir.path()));
    }

    #[test]
    fn test_missing_descriptor() {
        let dir = TempDir::new().unwrap();
        assert!(!is_project_root(dir.path()));
    }
}
