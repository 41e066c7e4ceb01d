//! Error types for the API client

use std::fmt;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Message used when a failed response carries no `error` text
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, reading the body)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API answered with a non-success status
    ///
    /// Displays as the server's message alone.
    #[error("{message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// `error` field of the response, or [`FALLBACK_ERROR_MESSAGE`]
        message: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Server-supplied message for application-level failures
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ApiResponse { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Check if the session is missing or lacks the required role
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::ApiResponse { status: 401 | 403, .. })
    }
}

/// Error context for better debugging
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Request ID for correlation
    pub request_id: String,
    /// Endpoint that was called
    pub endpoint: String,
    /// HTTP method used
    pub method: String,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (request_id: {})",
            self.method, self.endpoint, self.request_id
        )
    }
}
