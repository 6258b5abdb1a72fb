//! `IDF_EXTRA_ACTIONS_PATH` handling
//!
//! `idf.py` loads extension actions from every directory listed in this
//! semicolon-separated variable. Entries are only ever added.

use std::fmt;
use std::path::Path;

use crate::config::defaults::env::EXTRA_ACTIONS_PATH;
use crate::infra::environment::Environment;

/// Parsed extra actions search path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraActionsPath {
    entries: Vec<String>,
}

impl ExtraActionsPath {
    /// Parse a variable value; entries are trimmed and blanks dropped
    pub fn parse(value: &str) -> Self {
        Self {
            entries: value
                .split(';')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Entries in search order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether `entry` is already listed
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// Append `entry` unless it is already listed; returns whether it was added
    pub fn append(&mut self, entry: &str) -> bool {
        if self.contains(entry) {
            return false;
        }
        self.entries.push(entry.to_string());
        true
    }
}

impl fmt::Display for ExtraActionsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join(";"))
    }
}

/// Add a component directory to `IDF_EXTRA_ACTIONS_PATH`
///
/// The variable is rewritten only when the directory was not listed yet.
/// Returns whether the variable changed.
pub fn add_extra_actions_path(environment: &mut dyn Environment, path: &Path) -> bool {
    let entry = path.to_string_lossy();
    let mut actions = ExtraActionsPath::parse(&environment.var(EXTRA_ACTIONS_PATH).unwrap_or_default());
    if !actions.append(&entry) {
        return false;
    }

    let value = actions.to_string();
    tracing::debug!("Set {}: {}", EXTRA_ACTIONS_PATH, value);
    environment.set_var(EXTRA_ACTIONS_PATH, &value);
    true
}
