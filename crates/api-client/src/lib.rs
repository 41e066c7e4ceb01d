//! Typed client for the PlaReady racquet-stringing marketplace API
//!
//! This crate wraps the REST API used by customers, delivery partners and
//! admins. Every call goes through one request primitive on
//! [`PlaReadyClient`], which sends JSON with the session cookie and turns
//! failed responses into [`ApiError::ApiResponse`] carrying the server's
//! message.
//!
//! # Features
//!
//! - **Endpoint groups**: auth, services, orders, coupons, partner, admin
//! - **Session cookies**: shared by clones, exportable between processes
//! - **Display helpers**: status badges and order view models
//! - **Request correlation**: every request carries an `X-Request-ID`
//!
//! # Example
//!
//! ```rust,no_run
//! use plaready_api_client::{ClientConfig, PlaReadyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlaReadyClient::with_config(
//!         ClientConfig::default().with_origin("https://plaready.in"),
//!     )?;
//!
//!     client.auth().login("9876543210", "secret").await?;
//!
//!     for order in client.orders().my_orders().await? {
//!         let view = client.orders().format_order(&order);
//!         println!("{} {} {}", order.order_number, view.status_badge.text, view.formatted_price);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod view;

pub use client::PlaReadyClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::PlaReadyClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::auth::{AuthResponse, RegisterRequest, User};
    pub use crate::endpoints::coupons::{calculate_discount, CouponValidation, DiscountType};
    pub use crate::endpoints::orders::{CreateOrderRequest, OrderDetails, OrderSummary};
    pub use crate::endpoints::partner::PartnerRegistration;
    pub use crate::endpoints::{
        AdminApi, AuthApi, CouponsApi, MessageResponse, OrdersApi, PartnerApi, ServicesApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::view::{format_order, status_badge, BadgeColor, OrderView, StatusBadge};
}
