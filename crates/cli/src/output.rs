//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use clap::ValueEnum;
use owo_colors::OwoColorize;
use plaready_api_client::view::{BadgeColor, StatusBadge};
use plaready_web::{Notice, NoticeKind, Surface};
use serde::Serialize;
use std::io::{self, Write};

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Whether progress spinners and status lines should be shown
    #[must_use]
    pub fn is_text(self) -> bool {
        self == Self::Text
    }
}

/// Kind of status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Completed action
    Success,
    /// Failed action
    Error,
    /// Needs attention
    Warning,
    /// Neutral information
    Info,
}

/// Render a single status line, e.g. `✓ Logged in`
#[must_use]
pub fn status_line(tone: Tone, message: &str) -> String {
    match tone {
        Tone::Success => format!("{} {}", "✓".green(), message),
        Tone::Error => format!("{} {}", "✗".red(), message),
        Tone::Warning => format!("{} {}", "⚠".yellow(), message),
        Tone::Info => format!("{} {}", "ℹ".blue(), message),
    }
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{}", status_line(Tone::Success, message));
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{}", status_line(Tone::Error, message));
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{}", status_line(Tone::Warning, message));
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{}", status_line(Tone::Info, message));
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print an aligned `label: value` line
    pub fn field(label: &str, value: impl std::fmt::Display) {
        println!("  {:<16} {}", format!("{label}:").dimmed(), value);
    }
}

/// Paint a status badge label in its badge color
#[must_use]
pub fn paint_badge(badge: &StatusBadge) -> String {
    let text = badge.text.as_str();
    match badge.color {
        BadgeColor::Yellow => text.yellow().to_string(),
        BadgeColor::Blue => text.blue().to_string(),
        BadgeColor::Indigo => text.bright_blue().to_string(),
        BadgeColor::Purple => text.magenta().to_string(),
        BadgeColor::Teal => text.cyan().to_string(),
        BadgeColor::Orange => text.bright_red().to_string(),
        BadgeColor::Green => text.green().to_string(),
        BadgeColor::Red => text.red().to_string(),
        BadgeColor::Gray => text.bright_black().to_string(),
    }
}

/// Write a value to stdout as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Notice surface backed by a terminal stream
///
/// A terminal has a single output area, so every mount point exists and a
/// notice becomes one status line in the tone of its kind.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<io::Stderr> {
    /// Surface writing to stderr
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn set_inner_html(&mut self, _mount: &str, notice: &Notice) -> bool {
        let tone = match notice.kind {
            NoticeKind::Loading => Tone::Info,
            NoticeKind::Error => Tone::Error,
            NoticeKind::Success => Tone::Success,
        };
        writeln!(self.out, "{}", status_line(tone, &notice.message)).is_ok()
    }

    fn alert(&mut self, message: &str) {
        if writeln!(self.out, "{}", status_line(Tone::Warning, message)).is_err() {
            tracing::warn!(message, "Failed to write alert to terminal");
        }
    }
}
