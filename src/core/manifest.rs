//! Component manifest (idf_component.yml) lookup and parsing
//!
//! Only the `dependencies` mapping is read. Anything else in the manifest
//! belongs to the component manager and is ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults::{BMGR_KEYS, MAIN_DIR, MANIFEST_NAMES};
use crate::error::ManifestError;
use crate::infra::filesystem;

/// Dependency name to dependency spec
pub type Dependencies = BTreeMap<String, DependencySpec>;

/// A parsed component manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ManifestDocument {
    /// Declared dependencies; `dependencies: ~` is treated as empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Dependencies>,
}

/// One entry of the `dependencies` mapping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DependencySpec {
    /// `name: "^1.0"`
    Version(String),
    /// `name: { version: ..., override_path: ... }`
    Detailed(DetailedSpec),
    /// Any other shape, kept so it can be written back unchanged
    Other(serde_yaml::Value),
}

/// Structured dependency spec
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetailedSpec {
    /// Local directory that replaces the registry component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_path: Option<String>,

    /// Remaining fields (`version`, `path`, `git`, `rules`, ...)
    #[serde(flatten)]
    pub fields: serde_yaml::Mapping,
}

impl DependencySpec {
    /// The non-empty `override_path` of a structured spec
    pub fn override_path(&self) -> Option<&str> {
        match self {
            Self::Detailed(spec) => spec.override_path.as_deref().filter(|p| !p.is_empty()),
            _ => None,
        }
    }
}

/// The board manager entry of a manifest
#[derive(Debug, Clone, PartialEq)]
pub struct BoardManagerDependency {
    /// Alias key the entry was declared under
    pub key: String,
    /// Its spec
    pub spec: DependencySpec,
}

impl ManifestDocument {
    /// Parse a manifest from YAML
    ///
    /// Empty documents parse to an empty manifest.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let document: Option<Self> = serde_yaml::from_str(content)?;
        Ok(document.unwrap_or_default())
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Manifest declaring a single dependency
    pub fn single(key: &str, spec: DependencySpec) -> Self {
        let mut dependencies = Dependencies::new();
        dependencies.insert(key.to_string(), spec);
        Self {
            dependencies: Some(dependencies),
        }
    }

    /// Take the dependencies mapping, empty when absent
    pub fn into_dependencies(self) -> Dependencies {
        self.dependencies.unwrap_or_default()
    }
}

/// Find the project manifest under `main/`
///
/// Candidate names are checked in order and the first existing one wins.
pub fn find_manifest(project: &Path) -> Option<PathBuf> {
    let main_dir = project.join(MAIN_DIR);
    MANIFEST_NAMES
        .iter()
        .map(|name| main_dir.join(name))
        .find(|path| path.exists())
}

/// Load the dependencies declared by a manifest file
pub fn load_dependencies(manifest_path: &Path) -> Result<Dependencies, ManifestError> {
    let content = filesystem::read_file(manifest_path).map_err(|e| ManifestError::Read {
        path: manifest_path.to_path_buf(),
        error: e.to_string(),
    })?;
    let document = ManifestDocument::from_yaml(&content).map_err(|e| ManifestError::Parse {
        path: manifest_path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(document.into_dependencies())
}

/// Load dependencies, treating any failure as an empty mapping
///
/// A broken manifest must never stop `idf.py`; the error is only logged.
pub fn dependencies_or_empty(manifest_path: &Path) -> Dependencies {
    load_dependencies(manifest_path).unwrap_or_else(|e| {
        tracing::debug!("Ignoring manifest: {}", e);
        Dependencies::new()
    })
}

/// Pick the board manager entry out of a dependencies mapping
///
/// Alias keys are checked in order; when both are declared the first one wins.
pub fn find_board_manager(dependencies: &Dependencies) -> Option<BoardManagerDependency> {
    BMGR_KEYS.iter().find_map(|key| {
        dependencies.get(*key).map(|spec| BoardManagerDependency {
            key: (*key).to_string(),
            spec: spec.clone(),
        })
    })
}

/// Locate the project manifest and extract the board manager entry from it
pub fn project_board_manager(project: &Path) -> Option<BoardManagerDependency> {
    let manifest_path = find_manifest(project)?;
    find_board_manager(&dependencies_or_empty(&manifest_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(project: &Path, name: &str, content: &str) -> PathBuf {
        let path = project.join("main").join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_find_manifest_prefers_yml() {
        let project = TempDir::new().unwrap();
        write_manifest(project.path(), "idf_component.yaml", "");
        let yml = write_manifest(project.path(), "idf_component.yml", "");

        assert_eq!(find_manifest(project.path()), Some(yml));
    }

    #[test]
    fn test_find_manifest_falls_back_to_yaml() {
        let project = TempDir::new().unwrap();
        let yaml = write_manifest(project.path(), "idf_component.yaml", "");

        assert_eq!(find_manifest(project.path()), Some(yaml));
    }

    #[test]
    fn test_find_manifest_ignores_project_root() {
        let project = TempDir::new().unwrap();
        std::fs::write(project.path().join("idf_component.yml"), "").unwrap();

        assert_eq!(find_manifest(project.path()), None);
    }

    #[test]
    fn test_missing_manifest_degrades_to_empty() {
        let project = TempDir::new().unwrap();
        let path = project.path().join("main").join("idf_component.yml");

        assert!(load_dependencies(&path).is_err());
        assert!(dependencies_or_empty(&path).is_empty());
    }

    #[test]
    fn test_malformed_manifest_degrades_to_empty() {
        let project = TempDir::new().unwrap();
        let path = write_manifest(project.path(), "idf_component.yml", "dependencies: [unclosed");

        assert!(matches!(load_dependencies(&path), Err(ManifestError::Parse { .. })));
        assert!(dependencies_or_empty(&path).is_empty());
    }

    #[test]
    fn test_empty_and_null_dependencies() {
        assert!(ManifestDocument::from_yaml("").unwrap().into_dependencies().is_empty());
        assert!(ManifestDocument::from_yaml("dependencies:\n")
            .unwrap()
            .into_dependencies()
            .is_empty());
        assert!(ManifestDocument::from_yaml("description: app\n")
            .unwrap()
            .into_dependencies()
            .is_empty());
    }

    #[test]
    fn test_parses_version_and_detailed_specs() {
        let yaml = r#"
dependencies:
  idf: ">=5.4"
  espressif/esp_board_manager:
    version: "^0.3"
    override_path: "../local_bmgr"
"#;
        let dependencies = ManifestDocument::from_yaml(yaml).unwrap().into_dependencies();

        assert_eq!(
            dependencies.get("idf"),
            Some(&DependencySpec::Version(">=5.4".to_string()))
        );
        let bmgr = dependencies.get("espressif/esp_board_manager").unwrap();
        assert_eq!(bmgr.override_path(), Some("../local_bmgr"));
    }

    #[test]
    fn test_unusual_spec_shapes_are_kept() {
        let yaml = "dependencies:\n  esp_board_manager: 1.5\n  other: [a, b]\n";
        let dependencies = ManifestDocument::from_yaml(yaml).unwrap().into_dependencies();

        assert!(matches!(dependencies.get("esp_board_manager"), Some(DependencySpec::Other(_))));
        assert_eq!(dependencies.get("esp_board_manager").unwrap().override_path(), None);
    }

    #[test]
    fn test_empty_override_path_is_absent() {
        let yaml = "dependencies:\n  esp_board_manager:\n    override_path: \"\"\n";
        let dependencies = ManifestDocument::from_yaml(yaml).unwrap().into_dependencies();

        assert_eq!(dependencies.get("esp_board_manager").unwrap().override_path(), None);
    }

    #[test]
    fn test_find_board_manager_prefers_namespaced_key() {
        let yaml = r#"
dependencies:
  esp_board_manager: "0.1.0"
  espressif/esp_board_manager: "0.2.0"
"#;
        let dependencies = ManifestDocument::from_yaml(yaml).unwrap().into_dependencies();
        let found = find_board_manager(&dependencies).unwrap();

        assert_eq!(found.key, "espressif/esp_board_manager");
        assert_eq!(found.spec, DependencySpec::Version("0.2.0".to_string()));
    }

    #[test]
    fn test_find_board_manager_accepts_short_key() {
        let yaml = "dependencies:\n  esp_board_manager: \"*\"\n";
        let dependencies = ManifestDocument::from_yaml(yaml).unwrap().into_dependencies();

        assert_eq!(find_board_manager(&dependencies).unwrap().key, "esp_board_manager");
    }

    #[test]
    fn test_find_board_manager_none_when_absent() {
        let yaml = "dependencies:\n  espressif/led_strip: \"^2\"\n";
        let dependencies = ManifestDocument::from_yaml(yaml).unwrap().into_dependencies();

        assert!(find_board_manager(&dependencies).is_none());
    }

    #[test]
    fn test_single_manifest_keeps_extra_fields() {
        let yaml = r#"
dependencies:
  espressif/esp_board_manager:
    version: "^0.3"
    rules:
      - if: "target in [esp32s3]"
"#;
        let dependencies = ManifestDocument::from_yaml(yaml).unwrap().into_dependencies();
        let found = find_board_manager(&dependencies).unwrap();

        let synthetic = ManifestDocument::single(&found.key, found.spec.clone());
        let reparsed = ManifestDocument::from_yaml(&synthetic.to_yaml().unwrap()).unwrap();

        assert_eq!(reparsed, synthetic);
        assert!(synthetic.to_yaml().unwrap().contains("rules"));
    }

    #[test]
    fn test_project_board_manager_reads_main_manifest() {
        let project = TempDir::new().unwrap();
        write_manifest(
            project.path(),
            "idf_component.yml",
            "dependencies:\n  esp_board_manager:\n    override_path: ../bmgr\n",
        );

        let found = project_board_manager(project.path()).unwrap();
        assert_eq!(found.spec.override_path(), Some("../bmgr"));
    }
}
