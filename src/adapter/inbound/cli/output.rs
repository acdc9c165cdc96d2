//! Terminal output for the scenario runner.
//!
//! Every printed line goes through [`Line`], which renders either as a
//! styled human line or as a `{"type": .., "payload": ..}` JSON object.
//! Quiet mode drops everything except warnings, errors and JSON.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Output flags taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    let cell = CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Install the output flags for the rest of the process.
pub fn configure(config: OutputConfig) {
    let cell = CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// One unit of CLI output.
enum Line<'a> {
    Header { version: &'a str },
    Field { label: &'a str, value: String },
    Success(&'a str),
    Warning(&'a str),
    Error(&'a str),
    Section(&'a str),
    Note(&'a str),
    Block(&'a str),
}

impl Line<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Header { .. } => "header",
            Self::Field { .. } => "field",
            Self::Success(_) => "success",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
            Self::Section(_) => "section",
            Self::Note(_) => "note",
            Self::Block(_) => "lines",
        }
    }

    fn payload(&self) -> Value {
        match self {
            Self::Header { version } => json!({ "app": "matchday", "version": version }),
            Self::Field { label, value } => json!({ "label": label, "value": value }),
            Self::Section(title) => json!({ "title": title }),
            Self::Block(content) => json!({ "content": content }),
            Self::Success(message)
            | Self::Warning(message)
            | Self::Error(message)
            | Self::Note(message) => json!({ "message": message }),
        }
    }

    /// Lines that survive `--quiet`.
    const fn essential(&self) -> bool {
        matches!(self, Self::Warning(_) | Self::Error(_))
    }

    fn render(&self) -> String {
        match self {
            Self::Header { version } => format!("{} {}\n", "matchday".bold(), version.dimmed()),
            Self::Field { label, value } => format!("  {:<10} {}", label.dimmed(), value),
            Self::Success(message) => format!("  {} {}", "✓".green(), message),
            Self::Warning(message) => format!("  {} {}", "⚠".yellow(), message),
            Self::Error(message) => format!("  {} {}", "×".red(), message),
            Self::Section(title) => format!("\n{}", title.bold()),
            Self::Note(message) => format!("  {}", message.dimmed()),
            Self::Block(content) => content
                .lines()
                .map(|line| format!("  {line}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn emit(self) {
        let config = current();
        let to_stderr = matches!(self, Self::Error(_));

        let text = if config.json {
            json!({ "type": self.kind(), "payload": self.payload() }).to_string()
        } else if config.quiet && !self.essential() {
            return;
        } else {
            self.render()
        };

        if to_stderr {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }
}

/// Print the application name and version.
pub fn header(version: &str) {
    Line::Header { version }.emit();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    Line::Field {
        label,
        value: value.to_string(),
    }
    .emit();
}

pub fn success(message: &str) {
    Line::Success(message).emit();
}

/// Print a warning. Shown in quiet mode too.
pub fn warning(message: &str) {
    Line::Warning(message).emit();
}

/// Print an error to stderr.
pub fn error(message: &str) {
    Line::Error(message).emit();
}

pub fn section(title: &str) {
    Line::Section(title).emit();
}

pub fn note(message: &str) {
    Line::Note(message).emit();
}

/// Print pre-formatted multi-line content, indented.
pub fn lines(content: &str) {
    Line::Block(content).emit();
}

/// Emit a typed payload. Does nothing outside JSON mode.
pub fn json_payload(kind: &str, payload: Value) {
    if is_json() {
        println!("{}", json!({ "type": kind, "payload": payload }));
    }
}

/// Highlight a value in cyan (plain in JSON mode).
pub fn highlight(value: impl Display) -> String {
    if is_json() {
        return value.to_string();
    }
    value.to_string().cyan().to_string()
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner. Hidden in JSON and quiet mode.
pub fn spinner(message: &str) -> ProgressBar {
    let config = current();
    if config.json || config.quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(SPINNER_FRAMES)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Stop a spinner, leaving a success or failure mark behind.
pub fn spinner_finish(pb: &ProgressBar, ok: bool, message: &str) {
    if pb.is_hidden() {
        pb.finish_and_clear();
        return;
    }
    let mark = if ok {
        "✓".green().to_string()
    } else {
        "×".red().to_string()
    };
    pb.finish_with_message(format!("{mark} {message}"));
}
