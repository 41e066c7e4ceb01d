//! Core utilities for the PlaReady client
//!
//! This crate provides the functionality shared by the API client, the web
//! helpers and the command-line front end:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults
//! - **Storage**: Namespaced JSON key-value storage over pluggable backends
//! - **Formatting**: Currency and date rendering for display
//!
//! # Example
//!
//! ```rust
//! use plaready_core::storage::{MemoryStore, Storage};
//!
//! let storage = Storage::new("plaready", MemoryStore::new());
//! storage.set("last_city", &"Pune").unwrap();
//!
//! let city: Option<String> = storage.get("last_city").unwrap();
//! assert_eq!(city.as_deref(), Some("Pune"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod format;
pub mod storage;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::format::{format_currency, format_date, format_date_time};
    pub use crate::storage::{FileStore, KeyValueStore, MemoryStore, Storage};
}
