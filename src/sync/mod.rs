//! Core configuration sync operations

pub mod mirror;
pub mod validator;

pub use mirror::{copy_file, mirror_dir, MirrorStats};
pub use validator::{capture_output, run_validator, SyncVerdict};
