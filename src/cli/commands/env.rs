//! CLI implementation for `esp-bmgr env`
//!
//! Prints a shell line that puts the board manager on
//! `IDF_EXTRA_ACTIONS_PATH`, for use as `eval "$(esp-bmgr env)"`.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{is_json, print_warning};
use crate::config::defaults::env::EXTRA_ACTIONS_PATH;
use crate::core::actions_path::add_extra_actions_path;
use crate::core::project::is_project_root;
use crate::core::resolver;
use crate::infra::environment::{Environment, MemoryEnvironment};

/// Execute the env command
pub fn execute(project: &Path) -> Result<()> {
    let mut environment = MemoryEnvironment::from_process();

    let resolution = if is_project_root(project) {
        resolver::resolve(project)
    } else {
        print_warning(&format!(
            "{} is not an ESP-IDF project",
            project.display()
        ));
        resolver::Resolution::NotFound
    };

    let changed = resolution
        .path()
        .is_some_and(|path| add_extra_actions_path(&mut environment, path));
    let value = environment.var(EXTRA_ACTIONS_PATH);

    if is_json() {
        let json = serde_json::json!({
            "variable": EXTRA_ACTIONS_PATH,
            "value": value,
            "changed": changed,
            "provenance": resolution.provenance(),
            "path": resolution.path(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if resolution.path().is_none() {
        print_warning("Board manager component not found; nothing to export");
        return Ok(());
    }

    if let Some(value) = value {
        println!("export {EXTRA_ACTIONS_PATH}={}", shell_quote(&value));
    }
    Ok(())
}

/// Quote a value for POSIX shells
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
