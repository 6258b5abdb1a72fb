//! CLI implementation for `esp-bmgr clean`
//!
//! Removes the generated board code so the next `gen-bmgr-config` starts
//! from scratch.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{is_json, print_success};
use crate::core::clean::{generated_code_dir, remove_generated_code};

/// Execute the clean command
pub fn execute(project: &Path) -> Result<()> {
    let dir = generated_code_dir(project);
    let removed = remove_generated_code(project);

    if is_json() {
        let json = serde_json::json!({
            "path": dir,
            "removed": removed,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if removed {
        print_success(&format!("Removed {}", dir.display()));
    } else {
        print_success("Nothing to clean");
    }
    Ok(())
}
