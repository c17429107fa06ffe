//! Source and destination paths for the setup flow

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory inside the project holding the Claude configuration
pub const CLAUDE_SOURCE_DIR: &str = "claude";

/// Directory inside the project holding the Cursor rules
pub const CURSOR_SOURCE_DIR: &str = "cursor";

/// File name of the Cursor rules, both as source and destination
pub const CURSOR_RULES_FILE: &str = ".cursorrules";

/// Validator script, relative to the project directory
pub const VALIDATOR_SCRIPT: &str = "scripts/validate-sync.sh";

/// Get the Claude config directory (~/.claude)
pub fn claude_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".claude"))
}

/// Every path the setup flow reads from or writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPaths {
    /// Project directory holding `claude/`, `cursor/` and `scripts/`
    pub project_dir: PathBuf,
    /// Source tree mirrored into `claude_dest`
    pub claude_source: PathBuf,
    /// Claude config directory, usually ~/.claude
    pub claude_dest: PathBuf,
    /// Cursor rules shipped with the project
    pub cursor_source: PathBuf,
    /// Where the Cursor rules are written
    pub cursor_dest: PathBuf,
    /// Validator script
    pub validator: PathBuf,
}

impl SetupPaths {
    /// Build paths from a project directory, a target directory for
    /// `.cursorrules`, and the Claude config directory
    pub fn new(project_dir: &Path, target_dir: &Path, claude_dest: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            claude_source: project_dir.join(CLAUDE_SOURCE_DIR),
            claude_dest: claude_dest.to_path_buf(),
            cursor_source: project_dir.join(CURSOR_SOURCE_DIR).join(CURSOR_RULES_FILE),
            cursor_dest: target_dir.join(CURSOR_RULES_FILE),
            validator: project_dir.join(VALIDATOR_SCRIPT),
        }
    }

    /// Resolve paths, defaulting the project and target directories to the
    /// current directory and the Claude directory to ~/.claude
    pub fn resolve(
        project_dir: Option<PathBuf>,
        target_dir: Option<PathBuf>,
        claude_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let project_dir = project_dir.unwrap_or_else(|| cwd.clone());
        let target_dir = target_dir.unwrap_or(cwd);
        let claude_dest = match claude_dir {
            Some(dir) => dir,
            None => claude_config_dir()?,
        };
        Ok(Self::new(&project_dir, &target_dir, &claude_dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claude_config_dir() {
        // Should not panic; ends with .claude when a home directory exists
        if let Ok(dir) = claude_config_dir() {
            assert!(dir.ends_with(".claude"));
        }
    }

    #[test]
    fn test_setup_paths_layout() {
        let paths = SetupPaths::new(
            Path::new("/work/ai-configs"),
            Path::new("/work/app"),
            Path::new("/home/me/.claude"),
        );

        assert_eq!(paths.claude_source, PathBuf::from("/work/ai-configs/claude"));
        assert_eq!(paths.claude_dest, PathBuf::from("/home/me/.claude"));
        assert_eq!(
            paths.cursor_source,
            PathBuf::from("/work/ai-configs/cursor/.cursorrules")
        );
        assert_eq!(paths.cursor_dest, PathBuf::from("/work/app/.cursorrules"));
        assert_eq!(
            paths.validator,
            PathBuf::from("/work/ai-configs/scripts/validate-sync.sh")
        );
    }

    #[test]
    fn test_resolve_with_overrides() {
        let paths = SetupPaths::resolve(
            Some(PathBuf::from("/p")),
            Some(PathBuf::from("/t")),
            Some(PathBuf::from("/c")),
        )
        .unwrap();

        assert_eq!(paths.project_dir, PathBuf::from("/p"));
        assert_eq!(paths.cursor_dest, PathBuf::from("/t/.cursorrules"));
        assert_eq!(paths.claude_dest, PathBuf::from("/c"));
    }

    #[test]
    fn test_resolve_defaults_to_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let paths = SetupPaths::resolve(None, None, Some(PathBuf::from("/c"))).unwrap();

        assert_eq!(paths.project_dir, cwd);
        assert_eq!(paths.cursor_dest, cwd.join(".cursorrules"));
    }
}
