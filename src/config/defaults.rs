//! Default configuration values

/// Project subdirectory holding the application component
pub const MAIN_DIR: &str = "main";

/// Project subdirectory holding vendored components
pub const COMPONENTS_DIR: &str = "components";

/// Project subdirectory the component manager downloads into
pub const MANAGED_COMPONENTS_DIR: &str = "managed_components";

/// Lock file written by the component manager
pub const LOCK_FILE: &str = "dependencies.lock";

/// Build descriptor that marks a project root
pub const PROJECT_DESCRIPTOR: &str = "CMakeLists.txt";

/// Substring the build descriptor must contain
pub const PROJECT_MARKER: &str = "project.cmake";

/// Manifest file names under `main/`, checked in order
pub const MANIFEST_NAMES: &[&str] = &["idf_component.yml", "idf_component.yaml"];

/// Accepted dependency keys for the board manager, checked in order
pub const BMGR_KEYS: &[&str] = &["espressif/esp_board_manager", "esp_board_manager"];

/// Directory names of a vendored board manager under `components/`, checked in order
pub const VENDORED_NAMES: &[&str] = &["esp_board_manager", "espressif__esp_board_manager"];

/// Directory name of the downloaded board manager under `managed_components/`
pub const MANAGED_NAME: &str = "espressif__esp_board_manager";

/// Files that identify a board manager component directory
pub const COMPONENT_MARKERS: &[&str] = &["idf_ext.py", "idf_component.yml"];

/// Generated board code directory under `components/`
pub const GENERATED_CODE_DIR: &str = "gen_bmgr_codes";

/// Manifest file name used for the synthetic download manifest
pub const SYNTHETIC_MANIFEST: &str = "idf_component.yml";

/// Program name suffix of the host build tool
pub const HOST_TOOL: &str = "idf.py";

/// Host subcommand that discards generated board code
pub const SET_TARGET_COMMAND: &str = "set-target";

/// Host subcommand that may trigger a download
pub const GEN_CONFIG_COMMAND: &str = "gen-bmgr-config";

/// Chip target used when none is configured
pub const DEFAULT_TARGET: &str = "esp32";

/// Environment variable names
pub mod env {
    /// Semicolon-separated extension action search path read by `idf.py`
    pub const EXTRA_ACTIONS_PATH: &str = "IDF_EXTRA_ACTIONS_PATH";

    /// Set to `1` to enable debug diagnostics
    pub const DEBUG: &str = "ESP_BMGR_DEBUG";

    /// Python interpreter used to reach the component manager
    pub const PYTHON: &str = "ESP_BMGR_PYTHON";

    /// Chip target
    pub const TARGET: &str = "IDF_TARGET";

    /// Set while a download is running
    pub const UPDATING_DEPS: &str = "_IDF_EXT_UPDATING_DEPS";
}
