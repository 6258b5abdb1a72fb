//! Core business logic module
//!
//! This module contains the board manager resolution logic and the `idf.py`
//! hook built on top of it. Process and environment side effects go through
//! [`crate::infra`].
//!
//! # Submodules
//!
//! - [`project`] - ESP-IDF project detection
//! - [`manifest`] - Component manifest (idf_component.yml) lookup and parsing
//! - [`resolver`] - Override / vendored / managed component resolution
//! - [`actions_path`] - `IDF_EXTRA_ACTIONS_PATH` handling
//! - [`download`] - Board manager download through the component manager
//! - [`clean`] - Generated board code cleanup
//! - [`hook`] - `idf.py` integration hook
//! - [`doctor`] - Environment diagnostics

pub mod actions_path;
pub mod clean;
pub mod doctor;
pub mod download;
pub mod hook;
pub mod manifest;
pub mod project;
pub mod resolver;
