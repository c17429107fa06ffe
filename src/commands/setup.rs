//! Setup command - Copy Claude and Cursor configs into place and validate
//!
//! Steps run in a fixed order: detection, Claude, Cursor, validation,
//! summary. A failing tool step is reported and the next step still runs.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::config::SetupPaths;
use crate::sync::{self, SyncVerdict};
use crate::ui::{TerminalUi, Ui};

/// A configuration target handled by the setup flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Claude,
    Cursor,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Claude => write!(f, "Claude"),
            Self::Cursor => write!(f, "Cursor"),
        }
    }
}

/// What happened to a single tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The user answered no
    Declined,
    Configured,
    /// Nothing to copy
    Skipped { reason: String },
    Failed { reason: String },
}

/// Outcome of one tool step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub tool: Tool,
    pub outcome: StepOutcome,
}

/// Accumulated result of a setup run
#[derive(Debug, Default)]
pub struct SetupReport {
    /// Tool steps in the order they ran
    pub steps: Vec<StepResult>,
    /// Validator verdict; `None` when validation did not run
    pub verdict: Option<SyncVerdict>,
}

impl SetupReport {
    fn record(&mut self, tool: Tool, outcome: StepOutcome) {
        self.steps.push(StepResult { tool, outcome });
    }

    /// Tools that ended up configured, in step order
    pub fn configured_tools(&self) -> Vec<Tool> {
        self.steps
            .iter()
            .filter(|step| step.outcome == StepOutcome::Configured)
            .map(|step| step.tool)
            .collect()
    }

    pub fn outcome(&self, tool: Tool) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|step| step.tool == tool)
            .map(|step| &step.outcome)
    }
}

/// Which tools already have configuration on this machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub claude_dir_exists: bool,
}

impl Detection {
    pub fn probe(paths: &SetupPaths) -> Self {
        Self {
            claude_dir_exists: paths.claude_dest.exists(),
        }
    }
}

/// Options for the setup command
#[derive(Debug, Default)]
pub struct SetupOptions {
    pub project_dir: Option<PathBuf>,
    pub target_dir: Option<PathBuf>,
    pub claude_dir: Option<PathBuf>,
    /// Answer yes to every prompt
    pub yes: bool,
}

/// Execute the setup command against the real terminal
pub fn execute(options: SetupOptions) -> Result<SetupReport> {
    let paths = SetupPaths::resolve(options.project_dir, options.target_dir, options.claude_dir)?;
    debug!(?paths, "resolved setup paths");

    let mut ui = TerminalUi::new(options.yes);
    run(&mut ui, &paths)
}

/// Run the full setup flow
///
/// Only a failing prompt escapes as an error; copy failures are recorded in
/// the returned report.
pub fn run(ui: &mut dyn Ui, paths: &SetupPaths) -> Result<SetupReport> {
    ui.intro("🤖 AI Coding Configs Setup");

    let detection = Detection::probe(paths);
    debug!(?detection, "detected tools");
    report_detection(ui, &detection);

    let mut report = SetupReport::default();

    let outcome = if ui.confirm("Configure Claude?", detection.claude_dir_exists)? {
        run_step(ui, Tool::Claude, || configure_claude(paths))
    } else {
        StepOutcome::Declined
    };
    report.record(Tool::Claude, outcome);

    let outcome = if ui.confirm(
        "Configure Cursor? (will copy .cursorrules to current directory)",
        true,
    )? {
        run_step(ui, Tool::Cursor, || configure_cursor(paths))
    } else {
        StepOutcome::Declined
    };
    report.record(Tool::Cursor, outcome);

    if !report.configured_tools().is_empty() {
        ui.blank();
        ui.spinner_start("Validating synchronization");
        let output = sync::capture_output(&paths.validator, &paths.project_dir);
        ui.spinner_stop("");

        let verdict = SyncVerdict::from_output(&output);
        report_verdict(ui, verdict);
        report.verdict = Some(verdict);
    }

    report_summary(ui, &report);
    ui.outro("Setup complete!");

    Ok(report)
}

/// Mirror the project's `claude/` directory into the Claude config directory
pub fn configure_claude(paths: &SetupPaths) -> StepOutcome {
    match sync::mirror_dir(&paths.claude_source, &paths.claude_dest) {
        Ok(stats) => {
            debug!(
                files = stats.files_copied,
                dirs = stats.dirs_created,
                bytes = stats.bytes_copied,
                "claude configuration mirrored"
            );
            StepOutcome::Configured
        }
        Err(err) if err.is_not_found() => StepOutcome::Skipped {
            reason: "No claude/ directory found in project".to_string(),
        },
        Err(err) => {
            debug!(path = %err.path().display(), "claude step failed");
            StepOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

/// Copy `cursor/.cursorrules` into the target directory
pub fn configure_cursor(paths: &SetupPaths) -> StepOutcome {
    match sync::copy_file(&paths.cursor_source, &paths.cursor_dest) {
        Ok(_) => StepOutcome::Configured,
        Err(err) if err.is_not_found() => StepOutcome::Skipped {
            reason: "No .cursorrules file found in cursor/ directory".to_string(),
        },
        Err(err) => {
            debug!(path = %err.path().display(), "cursor step failed");
            StepOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

fn run_step(ui: &mut dyn Ui, tool: Tool, step: impl FnOnce() -> StepOutcome) -> StepOutcome {
    ui.spinner_start(&format!("Syncing {} configuration", tool));
    let outcome = step();

    match &outcome {
        StepOutcome::Configured => {
            ui.spinner_stop(&format!("✅ {} configured successfully", tool));
        }
        StepOutcome::Skipped { reason } => {
            ui.spinner_stop(&format!("⚠️  {}", reason));
        }
        StepOutcome::Failed { reason } => {
            ui.spinner_stop(&format!("❌ Failed to configure {}", tool));
            ui.error(reason);
        }
        StepOutcome::Declined => ui.spinner_stop(""),
    }

    outcome
}

fn report_detection(ui: &mut dyn Ui, detection: &Detection) {
    ui.info("Detected tools:");
    ui.info(&format!(
        "  Claude: {}",
        if detection.claude_dir_exists {
            "✓ Config directory found"
        } else {
            "✗ Not found"
        }
    ));
    ui.info("  Cursor: Uses project-level .cursorrules files");
    ui.blank();
}

fn report_verdict(ui: &mut dyn Ui, verdict: SyncVerdict) {
    match verdict {
        SyncVerdict::NotSynced => {
            ui.warning("Some principles are not fully synced");
            ui.info("Run `ai-config sync` to synchronize all principles");
        }
        SyncVerdict::Synced => ui.success("All principles are synchronized!"),
        SyncVerdict::Unknown => {}
    }
}

fn report_summary(ui: &mut dyn Ui, report: &SetupReport) {
    ui.blank();

    let configured = report.configured_tools();
    if configured.is_empty() {
        ui.info("No tools configured");
        return;
    }

    let names: Vec<String> = configured.iter().map(ToString::to_string).collect();
    ui.success(&format!("Configured: {}", names.join(", ")));

    ui.blank();
    ui.info("Next steps:");
    ui.info("  • Run `ai-config validate` to check sync status");
    ui.info("  • Run `ai-config sync` to sync principles");
    ui.info("  • Add `ai-config` to your PATH for easy access");
}
