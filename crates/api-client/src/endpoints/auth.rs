//! Authentication endpoints
//!
//! The backend keeps the session in a cookie, so a successful [`AuthApi::login`]
//! or [`AuthApi::register`] authenticates every later call made through the
//! same client.

use crate::client::PlaReadyClient;
use crate::endpoints::MessageResponse;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Role assigned to new accounts unless another is requested
pub const DEFAULT_ROLE: &str = "customer";

/// Authentication API interface
#[derive(Clone)]
pub struct AuthApi {
    client: PlaReadyClient,
}

impl AuthApi {
    /// Create a new auth API interface
    pub(crate) fn new(client: PlaReadyClient) -> Self {
        Self { client }
    }

    /// Create an account and start a session
    ///
    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.client.post("/auth/register", request).await
    }

    /// Start a session
    ///
    /// POST /auth/login
    pub async fn login(&self, phone: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = LoginRequest { phone, password };
        self.client.post("/auth/login", &body).await
    }

    /// End the session
    ///
    /// POST /auth/logout
    pub async fn logout(&self) -> ApiResult<MessageResponse> {
        self.client.post_empty("/auth/logout").await
    }

    /// Fetch the logged-in user
    ///
    /// GET /auth/me
    pub async fn current_user(&self) -> ApiResult<User> {
        self.client.get("/auth/me").await
    }

    /// Whether [`current_user`](Self::current_user) succeeds
    ///
    /// Every failure maps to `false`, so an unreachable server looks the
    /// same as a missing session.
    pub async fn is_authenticated(&self) -> bool {
        match self.current_user().await {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Treating failed session check as logged out");
                false
            }
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Phone number, also the login name
    pub phone: String,
    /// Plain-text password
    pub password: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `customer`, `partner` or `admin`
    pub role: String,
}

impl RegisterRequest {
    /// Create a customer registration
    pub fn new(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
            name: None,
            email: None,
            role: DEFAULT_ROLE.to_string(),
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Request a role other than `customer`
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    phone: &'a str,
    password: &'a str,
}

/// Response to register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Outcome message
    pub message: String,
    /// The authenticated user
    pub user: User,
}

/// Account details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: i64,
    /// Display name
    pub name: Option<String>,
    /// Phone number
    pub phone: String,
    /// Email (only returned by `/auth/me`)
    #[serde(default)]
    pub email: Option<String>,
    /// `customer`, `partner` or `admin`
    pub role: String,
}
