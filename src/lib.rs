//! esp-bmgr - ESP board manager component resolver
//!
//! This library finds the `esp_board_manager` component of an ESP-IDF
//! project, downloads it through the IDF component manager when it is
//! missing, and publishes its location to `idf.py` through the
//! `IDF_EXTRA_ACTIONS_PATH` environment variable.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Resolution logic and the `idf.py` hook
//! - [`infra`] - Infrastructure layer (filesystem, environment, component manager)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
