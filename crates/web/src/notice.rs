//! Loading, error and success notices
//!
//! A notice either replaces the content of a named mount point or, when no
//! mount point is given, is shown through the surface's blocking alert.
//! Loading notices always need a mount point.

use askama::Template;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Text shown by the loading fragment
pub const LOADING_MESSAGE: &str = "Loading...";

/// Markup shown while a request is in flight.
#[derive(Template)]
#[template(
    source = r#"<div class="loading"><div class="spinner"></div><p>{{ message }}</p></div>"#,
    ext = "html"
)]
struct LoadingFragment<'a> {
    message: &'a str,
}

/// Markup for an error or success message.
#[derive(Template)]
#[template(source = r#"<div class="{{ class }}">{{ message }}</div>"#, ext = "html")]
struct MessageFragment<'a> {
    class: &'a str,
    message: &'a str,
}

/// Notice errors
#[derive(Error, Debug)]
pub enum NoticeError {
    /// The surface has no element with this id
    #[error("Mount point not found: {0}")]
    MountNotFound(String),

    /// A fragment failed to render
    #[error("Failed to render notice: {0}")]
    Render(#[from] askama::Error),
}

/// What a notice reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A request is in flight
    Loading,
    /// Something failed
    Error,
    /// Something completed
    Success,
}

impl NoticeKind {
    /// CSS class of the fragment's outer element
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error-message",
            Self::Success => "success-message",
        }
    }
}

/// A rendered notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// What the notice reports
    pub kind: NoticeKind,
    /// Plain message text
    pub message: String,
    /// Escaped markup for the mount point
    pub html: String,
}

impl Notice {
    /// Render a notice of `kind` for `message`
    pub fn render(kind: NoticeKind, message: &str) -> Result<Self, NoticeError> {
        let html = match kind {
            NoticeKind::Loading => LoadingFragment { message }.render()?,
            NoticeKind::Error | NoticeKind::Success => MessageFragment {
                class: kind.css_class(),
                message,
            }
            .render()?,
        };
        Ok(Self {
            kind,
            message: message.to_string(),
            html,
        })
    }
}

/// Something that hosts named mount points and can show a blocking alert
pub trait Surface {
    /// Replace the content of `mount` with `notice`; returns `false` if the
    /// mount does not exist
    fn set_inner_html(&mut self, mount: &str, notice: &Notice) -> bool;

    /// Show `message` and wait for the user to dismiss it
    fn alert(&mut self, message: &str);
}

/// Show the loading fragment in `mount`
pub fn show_loading(surface: &mut impl Surface, mount: &str) -> Result<(), NoticeError> {
    inject(surface, mount, &Notice::render(NoticeKind::Loading, LOADING_MESSAGE)?)
}

/// Show an error in `mount`, or alert it when no mount is given
pub fn show_error(
    surface: &mut impl Surface,
    message: &str,
    mount: Option<&str>,
) -> Result<(), NoticeError> {
    show_message(surface, NoticeKind::Error, message, mount)
}

/// Show a success message in `mount`, or alert it when no mount is given
pub fn show_success(
    surface: &mut impl Surface,
    message: &str,
    mount: Option<&str>,
) -> Result<(), NoticeError> {
    show_message(surface, NoticeKind::Success, message, mount)
}

fn show_message(
    surface: &mut impl Surface,
    kind: NoticeKind,
    message: &str,
    mount: Option<&str>,
) -> Result<(), NoticeError> {
    match mount {
        Some(mount) => inject(surface, mount, &Notice::render(kind, message)?),
        None => {
            surface.alert(message);
            Ok(())
        }
    }
}

fn inject(surface: &mut impl Surface, mount: &str, notice: &Notice) -> Result<(), NoticeError> {
    if surface.set_inner_html(mount, notice) {
        debug!(mount = %mount, kind = ?notice.kind, "Rendered notice");
        Ok(())
    } else {
        Err(NoticeError::MountNotFound(mount.to_string()))
    }
}

/// In-memory page with a fixed set of mount points
#[derive(Debug, Default, Clone)]
pub struct HtmlPage {
    mounts: BTreeMap<String, String>,
    alerts: Vec<String>,
}

impl HtmlPage {
    /// Create a page without mount points
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty mount point
    #[must_use]
    pub fn with_mount(mut self, id: impl Into<String>) -> Self {
        self.mounts.insert(id.into(), String::new());
        self
    }

    /// Current markup of a mount point
    #[must_use]
    pub fn content(&self, id: &str) -> Option<&str> {
        self.mounts.get(id).map(String::as_str)
    }

    /// Alerts shown so far, oldest first
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Surface for HtmlPage {
    fn set_inner_html(&mut self, mount: &str, notice: &Notice) -> bool {
        match self.mounts.get_mut(mount) {
            Some(content) => {
                notice.html.clone_into(content);
                true
            }
            None => false,
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
