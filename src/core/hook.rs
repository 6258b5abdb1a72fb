//! `idf.py` integration hook
//!
//! The host tool calls [`HostHook::on_actions_loading`] right before it
//! loads its extension actions. The board manager hook uses that moment to
//! locate (and, for `gen-bmgr-config`, download) the board manager and put
//! it on `IDF_EXTRA_ACTIONS_PATH`.

use std::path::PathBuf;

use crate::config::defaults::{
    env, DEFAULT_TARGET, GEN_CONFIG_COMMAND, HOST_TOOL, SET_TARGET_COMMAND,
};
use crate::core::actions_path::add_extra_actions_path;
use crate::core::clean::remove_generated_code;
use crate::core::download::download_board_manager;
use crate::core::project::is_project_root;
use crate::core::resolver::{self, Provenance};
use crate::error::HookError;
use crate::infra::component_manager::ComponentManager;
use crate::infra::environment::Environment;
use crate::infra::filesystem::normalize;

/// Command line of the host tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    /// Wrap a full argument vector, program name first
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments, program name first
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the program is `idf.py`
    pub fn is_host_tool(&self) -> bool {
        self.args.first().is_some_and(|program| program.ends_with(HOST_TOOL))
    }

    /// Whether `arg` appears anywhere on the command line
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// Whether this is `idf.py gen-bmgr-config <args...>`
    pub fn is_gen_config(&self) -> bool {
        self.args.len() > 2 && self.args[1] == GEN_CONFIG_COMMAND
    }
}

/// What a hook run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// The hook already ran for this context
    AlreadyRan,
    /// The program is not `idf.py`
    NotHostTool,
    /// `set-target` was requested; generated code was dropped
    GeneratedCodeCleared,
    /// The directory is not an ESP-IDF project
    NotAProject,
    /// The component was put on the extra actions path
    Wired {
        /// Component directory
        path: PathBuf,
        /// Where it was found
        provenance: Provenance,
    },
    /// No component is available
    Unresolved,
}

/// Callback invoked by the host tool before extension actions are loaded
pub trait HostHook {
    /// Prepare the environment the host tool loads its actions with
    fn on_actions_loading(
        &mut self,
        invocation: &Invocation,
        environment: &mut dyn Environment,
    ) -> Result<HookOutcome, HookError>;
}

/// Board manager hook, one per host tool invocation
///
/// Fires at most once; later calls return [`HookOutcome::AlreadyRan`].
pub struct HookContext<'a> {
    project: PathBuf,
    manager: &'a dyn ComponentManager,
    fired: bool,
}

impl<'a> HookContext<'a> {
    /// Create a hook for the project at `project`
    pub fn new(project: impl Into<PathBuf>, manager: &'a dyn ComponentManager) -> Self {
        Self {
            project: project.into(),
            manager,
            fired: false,
        }
    }

    /// Whether the hook has run
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Fetch the board manager unless another download is in progress
    ///
    /// The guard variable is exported to the component manager, so hooks
    /// started underneath it skip their own download. It is cleared again
    /// whatever the download result.
    fn download(&self, environment: &mut dyn Environment) -> Result<(), HookError> {
        if environment.var(env::UPDATING_DEPS).as_deref() == Some("1") {
            tracing::debug!("Board manager download already in progress");
            return Ok(());
        }

        environment.set_var(env::UPDATING_DEPS, "1");
        if environment.var(env::TARGET).is_none() {
            environment.set_var(env::TARGET, DEFAULT_TARGET);
        }
        remove_generated_code(&self.project);

        let result = download_board_manager(&self.project, self.manager, &*environment);
        environment.remove_var(env::UPDATING_DEPS);

        result?;
        Ok(())
    }
}

impl HostHook for HookContext<'_> {
    fn on_actions_loading(
        &mut self,
        invocation: &Invocation,
        environment: &mut dyn Environment,
    ) -> Result<HookOutcome, HookError> {
        if self.fired {
            return Ok(HookOutcome::AlreadyRan);
        }
        self.fired = true;

        if !invocation.is_host_tool() {
            return Ok(HookOutcome::NotHostTool);
        }
        tracing::debug!("Hook invoked, argv: {:?}", invocation.args());

        if invocation.has_arg(SET_TARGET_COMMAND) {
            remove_generated_code(&self.project);
            return Ok(HookOutcome::GeneratedCodeCleared);
        }

        tracing::debug!("Project path: {}", self.project.display());
        if !is_project_root(&self.project) {
            return Ok(HookOutcome::NotAProject);
        }

        let local = resolver::find_local(&self.project);
        if let Some(path) = local.path() {
            add_extra_actions_path(environment, path);
            return Ok(HookOutcome::Wired {
                path: path.to_path_buf(),
                provenance: local.provenance(),
            });
        }

        let managed = resolver::managed_component_path(&self.project);
        if invocation.is_gen_config() && !managed.exists() {
            self.download(environment)?;
        }

        if managed.exists() {
            let path = normalize(&managed);
            add_extra_actions_path(environment, &path);
            return Ok(HookOutcome::Wired {
                path,
                provenance: Provenance::Managed,
            });
        }

        Ok(HookOutcome::Unresolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_tool_detection() {
        assert!(Invocation::new(["idf.py", "build"]).is_host_tool());
        assert!(Invocation::new(["/opt/esp-idf/tools/idf.py"]).is_host_tool());
        assert!(!Invocation::new(["cmake", "--build"]).is_host_tool());
        assert!(!Invocation::new(Vec::<String>::new()).is_host_tool());
    }

    #[test]
    fn test_gen_config_needs_an_argument() {
        assert!(!Invocation::new(["idf.py", "gen-bmgr-config"]).is_gen_config());
        assert!(Invocation::new(["idf.py", "gen-bmgr-config", "-b", "esp32_s3_korvo2_v3"])
            .is_gen_config());
        assert!(!Invocation::new(["idf.py", "build", "gen-bmgr-config"]).is_gen_config());
    }

    #[test]
    fn test_has_arg_matches_anywhere() {
        let invocation = Invocation::new(["idf.py", "-p", "/dev/ttyUSB0", "set-target", "esp32s3"]);
        assert!(invocation.has_arg("set-target"));
        assert!(!invocation.has_arg("build"));
    }
}
