//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one group of backend routes.
//! All paths are relative to `<origin>/api`.
//!
//! | Module | Routes | Audience |
//! |--------|--------|----------|
//! | `auth` | `/auth/*` | everyone |
//! | `services` | `/services` | customers |
//! | `orders` | `/orders*` | customers |
//! | `coupons` | `/coupons/validate` | customers |
//! | `partner` | `/partner/*` | delivery partners |
//! | `admin` | `/admin/*` | admins |

use serde::{Deserialize, Serialize};

pub mod admin;
pub mod auth;
pub mod coupons;
pub mod orders;
pub mod partner;
pub mod services;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use coupons::CouponsApi;
pub use orders::OrdersApi;
pub use partner::PartnerApi;
pub use services::ServicesApi;

/// Acknowledgement returned by most mutating routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome, e.g. "Partner approved"
    pub message: String,
}

/// Append `?status=<status>` when a non-empty filter is given
pub(crate) fn with_status_filter(path: &str, status: Option<&str>) -> String {
    match status {
        Some(s) if !s.is_empty() => format!("{path}?status={s}"),
        _ => path.to_string(),
    }
}
