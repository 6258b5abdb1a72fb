//! CLI implementation for `esp-bmgr resolve`

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{is_json, print_detail, print_info, print_success, print_warning};
use crate::core::project::is_project_root;
use crate::core::resolver::{self, Resolution};

/// Execute the resolve command
///
/// Not finding the component is a normal result and exits with status 0.
pub fn execute(project: &Path) -> Result<()> {
    let resolution = resolver::resolve(project);
    tracing::info!(
        "Board manager resolution for {}: {}",
        project.display(),
        resolution.provenance()
    );

    if is_json() {
        let json = serde_json::json!({
            "project": project,
            "is_project": is_project_root(project),
            "provenance": resolution.provenance(),
            "path": resolution.path(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if !is_project_root(project) {
        print_warning(&format!(
            "{} is not an ESP-IDF project (no project.cmake in CMakeLists.txt)",
            project.display()
        ));
    }

    match &resolution {
        Resolution::NotFound => {
            print_info("Board manager component not found locally");
            print_detail("Run 'esp-bmgr download' to fetch it into managed_components/");
        }
        found => {
            if let Some(path) = found.path() {
                print_success(&format!(
                    "Board manager: {} ({})",
                    path.display(),
                    found.provenance()
                ));
            }
        }
    }

    Ok(())
}
