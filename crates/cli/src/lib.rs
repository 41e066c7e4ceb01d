//! CLI utilities for PlaReady command-line tools
//!
//! Provides shared CLI functionality:
//! - Status lines and colored order badges
//! - A terminal [`Surface`](plaready_web::Surface) for page notices
//! - Loading spinners

#![warn(missing_docs)]

pub mod output;
pub mod progress;

pub use output::{OutputFormat, Status, TerminalSurface};
