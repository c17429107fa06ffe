//! Validate command - Run the sync validator and print its verdict

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::VALIDATOR_SCRIPT;
use crate::sync::{self, SyncVerdict};

/// Output format for the validate command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Captured validator run
#[derive(Debug, Serialize)]
pub struct Validation {
    pub verdict: SyncVerdict,
    pub output: String,
}

/// Run the validator found under `project_dir`
pub fn validate(project_dir: Option<PathBuf>) -> Result<Validation> {
    let project_dir = match project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let script = project_dir.join(VALIDATOR_SCRIPT);
    if !script.exists() {
        bail!("Validator not found: {}", script.display());
    }

    let output = sync::capture_output(&script, &project_dir);
    Ok(Validation {
        verdict: SyncVerdict::from_output(&output),
        output,
    })
}

/// Format a validation for display
pub fn format_validation(validation: &Validation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(validation)?),
        OutputFormat::Text => {
            let verdict = match validation.verdict {
                SyncVerdict::Synced => "All principles are synchronized!".green().to_string(),
                SyncVerdict::NotSynced => {
                    "Some principles are not fully synced".yellow().to_string()
                }
                SyncVerdict::Unknown => "Sync status unknown".dimmed().to_string(),
            };
            let body = validation.output.trim_end();
            if body.is_empty() {
                Ok(verdict)
            } else {
                Ok(format!("{}\n\n{}", body, verdict))
            }
        }
    }
}

/// Execute the validate command
pub fn execute(project_dir: Option<PathBuf>, format: OutputFormat) -> Result<SyncVerdict> {
    let validation = validate(project_dir)?;
    println!("{}", format_validation(&validation, format)?);
    Ok(validation.verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TEXT"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("md"), None);
    }

    #[test]
    fn test_validate_without_script_fails() {
        let tmp = TempDir::new().unwrap();
        let err = validate(Some(tmp.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Validator not found"));
    }

    #[test]
    fn test_format_json() {
        let validation = Validation {
            verdict: SyncVerdict::Synced,
            output: "✅ ok\n".to_string(),
        };
        let json = format_validation(&validation, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verdict"], "synced");
        assert_eq!(value["output"], "✅ ok\n");
    }

    #[test]
    fn test_format_text_includes_output() {
        let validation = Validation {
            verdict: SyncVerdict::NotSynced,
            output: "❌ drift\n".to_string(),
        };
        let text = format_validation(&validation, OutputFormat::Text).unwrap();
        assert!(text.starts_with("❌ drift"));
        assert!(text.contains("not fully synced"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_runs_project_script() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let script = tmp.path().join(VALIDATOR_SCRIPT);
        std::fs::create_dir_all(script.parent().unwrap()).unwrap();
        std::fs::write(&script, "#!/bin/sh\necho '✅ synced'\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let validation = validate(Some(tmp.path().to_path_buf())).unwrap();

        assert_eq!(validation.verdict, SyncVerdict::Synced);
        assert!(validation.output.contains("synced"));
    }
}
