//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new, empty directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a directory that looks like an ESP-IDF project
    pub fn idf_project() -> Self {
        let project = Self::new();
        project.create_file("CMakeLists.txt", SAMPLE_CMAKELISTS);
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    #[allow(dead_code)]
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Create a board manager component (a directory with `idf_ext.py`)
    #[allow(dead_code)]
    pub fn create_component(&self, name: &str) {
        self.create_file(&format!("{name}/idf_ext.py"), "def action_extensions(base_actions, project_path):\n    return {}\n");
    }

    /// Canonical path of an entry in the project
    #[allow(dead_code)]
    pub fn canonical(&self, name: &str) -> PathBuf {
        self.dir
            .path()
            .join(name)
            .canonicalize()
            .expect("Failed to canonicalize path")
    }

    /// Check if a file exists in the test project
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the esp-bmgr binary inside `dir`
///
/// Variables that would leak the caller's setup into the test are cleared,
/// and the Python interpreter points nowhere so downloads never reach the
/// network.
#[allow(dead_code)]
pub fn run_bmgr(dir: &Path, args: &[&str]) -> Output {
    bmgr_command(dir)
        .args(args)
        .output()
        .expect("Failed to execute esp-bmgr")
}

/// Isolated esp-bmgr command rooted in `dir`
#[allow(dead_code)]
pub fn bmgr_command(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_esp-bmgr"));
    cmd.current_dir(dir)
        .env_remove("ESP_BMGR_PROJECT")
        .env_remove("ESP_BMGR_DEBUG")
        .env_remove("IDF_EXTRA_ACTIONS_PATH")
        .env_remove("IDF_TARGET")
        .env_remove("_IDF_EXT_UPDATING_DEPS")
        .env_remove("RUST_LOG")
        .env("ESP_BMGR_PYTHON", "/nonexistent/esp-bmgr-test/python");
    cmd
}

/// Top-level CMakeLists.txt of an ESP-IDF project
pub const SAMPLE_CMAKELISTS: &str = "\
cmake_minimum_required(VERSION 3.16)
include($ENV{IDF_PATH}/tools/cmake/project.cmake)
project(bmgr_test)
";

/// Manifest declaring the board manager from the registry
#[allow(dead_code)]
pub const MANIFEST_REGISTRY: &str = "\
dependencies:
  idf: \">=5.4\"
  espressif/esp_board_manager: \"^0.4\"
";

/// Manifest pointing the board manager at a sibling checkout
#[allow(dead_code)]
pub const MANIFEST_OVERRIDE: &str = "\
dependencies:
  espressif/esp_board_manager:
    version: \"*\"
    override_path: \"../bmgr_dev\"
";
