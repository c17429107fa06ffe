//! ai-config-setup library
//!
//! Copies Claude and Cursor configuration from a project into place and
//! checks the result with the project's sync validator.

pub mod commands;
pub mod config;
pub mod error;
pub mod sync;
pub mod ui;

pub use error::{Result, SetupError};
