//! Environment variable access
//!
//! The hook never writes to the process environment directly. It works on
//! an [`Environment`], and the launcher applies the recorded changes to the
//! `idf.py` child process.

use std::collections::BTreeMap;
use std::process::Command;

/// Read/write access to a set of environment variables
pub trait Environment {
    /// Value of `key`, if set and valid UTF-8
    fn var(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`
    fn set_var(&mut self, key: &str, value: &str);

    /// Unset `key`
    fn remove_var(&mut self, key: &str);

    /// Apply the recorded changes to a child process
    fn apply_to(&self, command: &mut Command);
}

/// In-memory environment layered over a base snapshot
///
/// Changes are kept apart from the base so that only they are applied to
/// a child process.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
    base: BTreeMap<String, String>,
    changes: BTreeMap<String, Option<String>>,
}

impl MemoryEnvironment {
    /// Snapshot the current process environment
    ///
    /// Variables that are not valid UTF-8 are left out of the snapshot; they
    /// are still inherited by child processes because only changes are
    /// applied.
    pub fn from_process() -> Self {
        let base = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self {
            base,
            changes: BTreeMap::new(),
        }
    }

    /// Build an environment from explicit variables
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            base: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            changes: BTreeMap::new(),
        }
    }

    /// Variables changed since the snapshot (`None` means removed)
    pub fn changes(&self) -> &BTreeMap<String, Option<String>> {
        &self.changes
    }

    /// Whether any variable differs from the snapshot
    pub fn is_modified(&self) -> bool {
        self.changes
            .iter()
            .any(|(key, value)| self.base.get(key) != value.as_ref())
    }
}

impl Environment for MemoryEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        match self.changes.get(key) {
            Some(value) => value.clone(),
            None => self.base.get(key).cloned(),
        }
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.changes.insert(key.to_string(), Some(value.to_string()));
    }

    fn remove_var(&mut self, key: &str) {
        self.changes.insert(key.to_string(), None);
    }

    fn apply_to(&self, command: &mut Command) {
        for (key, value) in &self.changes {
            match value {
                Some(value) => {
                    command.env(key, value);
                }
                None => {
                    command.env_remove(key);
                }
            }
        }
    }
}
