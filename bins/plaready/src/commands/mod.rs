//! CLI command implementations

pub mod admin;
pub mod auth;
pub mod coupons;
pub mod orders;
pub mod partner;
pub mod services;

use crate::session::Session;
use anyhow::Result;
use plaready_api_client::{ApiResult, PlaReadyClient};
use plaready_cli::output::print_json;
use plaready_cli::{progress, OutputFormat, TerminalSurface};
use plaready_web::show_success;
use serde::Serialize;
use std::future::Future;
use std::io;

/// Mount point notices are rendered into on the terminal
const STATUS_MOUNT: &str = "status";

/// Everything a command needs to run
pub struct Context {
    session: Session,
    format: OutputFormat,
}

impl Context {
    pub fn new(session: Session, format: OutputFormat) -> Self {
        Self { session, format }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &PlaReadyClient {
        self.session.client()
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Await an API call behind a spinner (text mode only)
    pub async fn load<T>(
        &self,
        message: &str,
        call: impl Future<Output = ApiResult<T>>,
    ) -> ApiResult<T> {
        let pb = progress::loading(message, self.format.is_text());
        let result = call.await;
        progress::finish(&pb);
        result
    }

    /// Print `value` as JSON, or run `text` to print it for humans
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce(&T)) -> Result<()> {
        if self.is_json() {
            print_json(value)?;
        } else {
            text(value);
        }
        Ok(())
    }

    /// Show a success notice in text mode
    pub fn success(&self, message: &str) -> Result<()> {
        if self.format.is_text() {
            show_success(&mut TerminalSurface::new(io::stdout()), message, Some(STATUS_MOUNT))?;
        }
        Ok(())
    }
}
