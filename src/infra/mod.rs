//! Infrastructure layer
//!
//! Handles the I/O that the resolver delegates: filesystem helpers, the
//! environment handed to `idf.py`, and the external component manager.

pub mod component_manager;
pub mod environment;
pub mod filesystem;
