//! CLI commands

pub mod setup;
pub mod validate;
