//! Doctor command logic
//!
//! Checks the project layout and the tools the board manager relies on, and
//! reports issues with suggestions.

use std::path::Path;

use crate::core::manifest;
use crate::core::project::is_project_root;
use crate::core::resolver::{self, Resolution};
use crate::infra::component_manager::{ComponentManager, PythonComponentManager};

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the thing being checked
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Detail shown next to a passing check (version, path)
    pub detail: Option<String>,
    /// Error message if check failed
    pub error: Option<String>,
    /// Suggestion for fixing the issue
    pub suggestion: Option<String>,
    /// Whether this is a required or optional check
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, detail: Option<String>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            detail,
            error: None,
            suggestion: None,
            required,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, error: &str, suggestion: Option<&str>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            detail: None,
            error: Some(error.to_string()),
            suggestion: suggestion.map(String::from),
            required,
        }
    }
}

/// Overall doctor report
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
    /// Resolution of the board manager component
    pub resolution: Option<Resolution>,
}

impl DoctorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check result
    pub fn add_check(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    /// Check if all required checks passed
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    /// Check if all checks passed (including optional)
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Count passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Count failed checks
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Get all failed required checks
    pub fn failed_required(&self) -> Vec<&CheckResult> {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .collect()
    }
}

/// Extract version string from command output
fn extract_version(output: &str) -> Option<String> {
    let version_regex = regex::Regex::new(r"v?(\d+\.\d+(?:\.\d+)?(?:-\w+)?)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check that the directory is an ESP-IDF project
pub fn check_project(project_dir: &Path) -> CheckResult {
    if is_project_root(project_dir) {
        CheckResult::pass("ESP-IDF project", Some(project_dir.display().to_string()), true)
    } else {
        CheckResult::fail(
            "ESP-IDF project",
            "CMakeLists.txt with project.cmake not found",
            Some("Run esp-bmgr from the project root or pass --project <DIR>"),
            true,
        )
    }
}

/// Check the component manifest and its board manager entry
pub fn check_manifest(project_dir: &Path) -> CheckResult {
    let Some(manifest_path) = manifest::find_manifest(project_dir) else {
        return CheckResult::fail(
            "Component manifest",
            "main/idf_component.yml not found",
            Some("Add espressif/esp_board_manager to main/idf_component.yml"),
            false,
        );
    };

    let dependencies = match manifest::load_dependencies(&manifest_path) {
        Ok(dependencies) => dependencies,
        Err(e) => {
            return CheckResult::fail(
                "Component manifest",
                &e.to_string(),
                Some("Fix the YAML syntax of the manifest"),
                false,
            )
        }
    };

    match manifest::find_board_manager(&dependencies) {
        Some(dependency) => CheckResult::pass("Component manifest", Some(dependency.key), false),
        None => CheckResult::fail(
            "Component manifest",
            "esp_board_manager is not declared as a dependency",
            Some("Add espressif/esp_board_manager to main/idf_component.yml"),
            false,
        ),
    }
}

/// Check the Python interpreter used for downloads
pub fn check_python(manager: &PythonComponentManager) -> CheckResult {
    let version = manager.python().and_then(|python| {
        std::process::Command::new(python)
            .arg("--version")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                extract_version(&format!("{stdout}{stderr}"))
            })
    });

    match version {
        Some(version) => CheckResult::pass("Python", Some(version), false),
        None => CheckResult::fail(
            "Python",
            "Python interpreter not found",
            Some("Set ESP_BMGR_PYTHON to the ESP-IDF Python environment"),
            false,
        ),
    }
}

/// Check the component manager needed for downloads
pub fn check_component_manager(manager: &dyn ComponentManager) -> CheckResult {
    if manager.is_available() {
        CheckResult::pass("idf-component-manager", None, false)
    } else {
        CheckResult::fail(
            "idf-component-manager",
            "idf-component-manager is not importable",
            Some("pip install idf-component-manager"),
            false,
        )
    }
}

/// Check where the board manager component resolves to
pub fn check_component(resolution: &Resolution) -> CheckResult {
    match resolution.path() {
        Some(path) => CheckResult::pass(
            "Board manager component",
            Some(format!("{} ({})", path.display(), resolution.provenance())),
            false,
        ),
        None => CheckResult::fail(
            "Board manager component",
            "esp_board_manager not found locally",
            Some("Run 'esp-bmgr download' or 'idf.py gen-bmgr-config -b <board>'"),
            false,
        ),
    }
}

/// Run all doctor checks
pub fn run_doctor(project_dir: &Path, python: &PythonComponentManager) -> DoctorReport {
    let mut report = DoctorReport::new();

    report.add_check(check_project(project_dir));
    report.add_check(check_manifest(project_dir));

    let resolution = resolver::resolve(project_dir);
    report.add_check(check_component(&resolution));
    report.resolution = Some(resolution);

    report.add_check(check_python(python));
    report.add_check(check_component_manager(python));

    report
}
