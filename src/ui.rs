//! Terminal interaction: prompts, spinners and leveled messages

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::debug;

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Everything the setup flow needs from the terminal
pub trait Ui {
    /// Opening banner
    fn intro(&mut self, title: &str);

    /// Closing banner
    fn outro(&mut self, message: &str);

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Start a spinner with a status message
    fn spinner_start(&mut self, message: &str);

    /// Stop the running spinner, printing `message` unless it is empty
    fn spinner_stop(&mut self, message: &str);

    fn log(&mut self, level: Level, message: &str);

    /// Print an empty line
    fn blank(&mut self);

    fn info(&mut self, message: &str) {
        self.log(Level::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.log(Level::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.log(Level::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// [`Ui`] backed by the real terminal
#[derive(Default)]
pub struct TerminalUi {
    assume_yes: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalUi {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            spinner: None,
        }
    }
}

impl Ui for TerminalUi {
    fn intro(&mut self, title: &str) {
        println!("{}  {}", "┌".dimmed(), title.bold().cyan());
    }

    fn outro(&mut self, message: &str) {
        println!("{}  {}", "└".dimmed(), message.bold().green());
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        if self.assume_yes {
            println!("{}  {} {}", "◇".green(), message, "yes".dimmed());
            return Ok(true);
        }

        // Non-interactive runs take the default answer
        if !std::io::stdin().is_terminal() {
            debug!(prompt = message, default, "stdin is not a terminal, using default");
            let answer = if default { "yes" } else { "no" };
            println!("{}  {} {}", "◇".green(), message, answer.dimmed());
            return Ok(default);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(default)
            .interact()
            .with_context(|| format!("Failed to read answer to: {}", message))
    }

    fn spinner_start(&mut self, message: &str) {
        if let Some(previous) = self.spinner.take() {
            previous.finish_and_clear();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(message.to_string());
        self.spinner = Some(pb);
    }

    fn spinner_stop(&mut self, message: &str) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        if !message.is_empty() {
            println!("{}  {}", "◇".green(), message);
        }
    }

    fn log(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => println!("{}  {}", "●".blue(), message.dimmed()),
            Level::Success => println!("{}  {}", "◆".green(), message.green()),
            Level::Warning => println!("{}  {}", "▲".yellow(), message.yellow()),
            Level::Error => eprintln!("{}  {}", "■".red(), message.red()),
        }
    }

    fn blank(&mut self) {
        println!("{}", "│".dimmed());
    }
}
