//! Web-facing helpers for PlaReady front ends
//!
//! This crate renders the fixed loading, error and success fragments that
//! pages show while talking to the API, and injects them into named mount
//! points of any [`Surface`](notice::Surface). Fragments are askama templates,
//! so message text is always HTML-escaped.

#![warn(missing_docs)]

pub mod notice;

pub use notice::{
    show_error, show_loading, show_success, HtmlPage, Notice, NoticeError, NoticeKind, Surface,
};
