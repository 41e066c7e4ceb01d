//! Progress indicators
//!
//! Spinners are drawn on stderr and only in text mode, so JSON output on
//! stdout is never interleaved with terminal control sequences.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for a request in flight
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Spinner when `visible`, otherwise a hidden bar that draws nothing
pub fn loading(message: &str, visible: bool) -> ProgressBar {
    if visible {
        spinner(message)
    } else {
        ProgressBar::hidden()
    }
}

/// Remove a spinner from the terminal
pub fn finish(pb: &ProgressBar) {
    pb.finish_and_clear();
}
