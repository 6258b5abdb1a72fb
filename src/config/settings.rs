//! Runtime settings
//!
//! A snapshot of the environment variables that tune esp-bmgr, taken once
//! per invocation.

use std::path::PathBuf;

use crate::config::defaults::env;
use crate::infra::environment::Environment;

/// Settings read from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// `ESP_BMGR_DEBUG=1` enables debug diagnostics
    pub debug: bool,
    /// Explicit Python interpreter for the component manager
    pub python: Option<PathBuf>,
    /// Configured chip target, if any
    pub target: Option<String>,
}

impl Settings {
    /// Read settings from the given environment
    pub fn from_environment(environment: &dyn Environment) -> Self {
        Self {
            debug: environment.var(env::DEBUG).as_deref() == Some("1"),
            python: environment
                .var(env::PYTHON)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            target: environment
                .var(env::TARGET)
                .filter(|t| !t.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::environment::MemoryEnvironment;

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_environment(&MemoryEnvironment::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_debug_requires_exact_one() {
        let mut environment = MemoryEnvironment::default();
        environment.set_var(env::DEBUG, "true");
        assert!(!Settings::from_environment(&environment).debug);

        environment.set_var(env::DEBUG, "1");
        assert!(Settings::from_environment(&environment).debug);
    }

    #[test]
    fn test_reads_python_and_target() {
        let mut environment = MemoryEnvironment::default();
        environment.set_var(env::PYTHON, "/opt/idf/python");
        environment.set_var(env::TARGET, "esp32s3");

        let settings = Settings::from_environment(&environment);
        assert_eq!(settings.python, Some(PathBuf::from("/opt/idf/python")));
        assert_eq!(settings.target.as_deref(), Some("esp32s3"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut environment = MemoryEnvironment::default();
        environment.set_var(env::PYTHON, "  ");
        environment.set_var(env::TARGET, "");

        let settings = Settings::from_environment(&environment);
        assert!(settings.python.is_none());
        assert!(settings.target.is_none());
    }
}
