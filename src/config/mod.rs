//! Configuration and constants
//!
//! - [`defaults`] - File names, directory names and environment variable names
//! - [`settings`] - Environment-driven runtime settings

pub mod defaults;
pub mod settings;
