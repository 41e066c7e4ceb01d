//! Customer order endpoints

use crate::client::PlaReadyClient;
use crate::error::ApiResult;
use crate::view::{self, OrderRecord, OrderView, StatusBadge};
use serde::{Deserialize, Serialize};

/// Orders API interface
#[derive(Clone)]
pub struct OrdersApi {
    client: PlaReadyClient,
}

impl OrdersApi {
    /// Create a new orders API interface
    pub(crate) fn new(client: PlaReadyClient) -> Self {
        Self { client }
    }

    /// Place an order
    ///
    /// POST /orders
    pub async fn create(&self, order: &CreateOrderRequest) -> ApiResult<OrderCreated> {
        self.client.post("/orders", order).await
    }

    /// Orders placed by the logged-in customer, newest first
    ///
    /// GET /orders/my
    pub async fn my_orders(&self) -> ApiResult<Vec<OrderSummary>> {
        self.client.get("/orders/my").await
    }

    /// Full details of one order
    ///
    /// GET /orders/:id
    pub async fn details(&self, id: i64) -> ApiResult<OrderDetails> {
        self.client.get(&format!("/orders/{id}")).await
    }

    /// Find one of the customer's orders by scanning [`my_orders`](Self::my_orders)
    pub async fn find_by_id(&self, id: i64) -> ApiResult<Option<OrderSummary>> {
        let orders = self.my_orders().await?;
        Ok(orders.into_iter().find(|order| order.id == id))
    }

    /// Display view of an order
    #[must_use]
    pub fn format_order<O: OrderRecord + Clone>(&self, order: &O) -> OrderView<O> {
        view::format_order(order)
    }

    /// Badge for an order status
    #[must_use]
    pub fn status_badge(&self, status: &str) -> StatusBadge {
        view::status_badge(status)
    }
}

/// Order payload
///
/// Only `service_id` and `pickup_slot` are required by the backend; unset
/// fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Service being booked
    pub service_id: i64,
    /// Pickup time, ISO-8601 (e.g. `2024-06-01T10:00:00`)
    pub pickup_slot: String,
    /// Racquet model or sport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub racquet_type: Option<String>,
    /// String model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_type: Option<String>,
    /// Tension, e.g. `24 lbs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<String>,
    /// Where to collect the racquet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,
    /// Extra charge for the chosen string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_price: Option<f64>,
    /// Coupon to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// `online` (server default) or `cod`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl CreateOrderRequest {
    /// Create an order for a service at a pickup slot
    pub fn new(service_id: i64, pickup_slot: impl Into<String>) -> Self {
        Self {
            service_id,
            pickup_slot: pickup_slot.into(),
            ..Self::default()
        }
    }

    /// Set the racquet, string and tension
    #[must_use]
    pub fn with_racquet(
        mut self,
        racquet_type: impl Into<String>,
        string_type: impl Into<String>,
        tension: impl Into<String>,
    ) -> Self {
        self.racquet_type = Some(racquet_type.into());
        self.string_type = Some(string_type.into());
        self.tension = Some(tension.into());
        self
    }

    /// Set the pickup address
    #[must_use]
    pub fn with_pickup_address(mut self, address: impl Into<String>) -> Self {
        self.pickup_address = Some(address.into());
        self
    }

    /// Set the string surcharge
    #[must_use]
    pub fn with_string_price(mut self, price: f64) -> Self {
        self.string_price = Some(price);
        self
    }

    /// Apply a coupon code
    #[must_use]
    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }

    /// Set the payment method
    #[must_use]
    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }
}

/// Response to order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreated {
    /// Outcome message
    pub message: String,
    /// Customer-facing number, e.g. `PLR20240105A1B2C3`
    pub order_number: String,
    /// Order ID
    pub order_id: i64,
    /// Total after string price and discount
    pub total_price: f64,
}

/// Order as it appears in customer, partner and admin lists
///
/// Which name fields are present depends on the list it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Order ID
    pub id: i64,
    /// Customer-facing number
    pub order_number: String,
    /// Booked service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Customer (partner and admin lists)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Assigned partner (admin list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    /// Lifecycle status
    pub status: String,
    /// Order total
    #[serde(default)]
    pub total_price: f64,
    /// Pickup time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_slot: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

impl OrderRecord for OrderSummary {
    fn status(&self) -> &str {
        &self.status
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn total_price(&self) -> f64 {
        self.total_price
    }
}

/// Full order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Order ID
    pub id: i64,
    /// Customer-facing number
    pub order_number: String,
    /// Booked service
    pub service: ServiceRef,
    /// Racquet model or sport
    pub racquet_type: Option<String>,
    /// String model
    pub string_type: Option<String>,
    /// Tension
    pub tension: Option<String>,
    /// Pickup address
    pub pickup_address: Option<String>,
    /// Pickup time
    pub pickup_slot: Option<String>,
    /// Service price
    #[serde(default)]
    pub base_price: f64,
    /// String surcharge
    #[serde(default)]
    pub string_price: f64,
    /// Coupon discount
    #[serde(default)]
    pub discount: f64,
    /// Amount payable
    #[serde(default)]
    pub total_price: f64,
    /// Lifecycle status
    pub status: String,
    /// `pending`, `paid`, ...
    pub payment_status: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Assigned partner, once there is one
    pub partner: Option<PartnerRef>,
}

impl OrderRecord for OrderDetails {
    fn status(&self) -> &str {
        &self.status
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn total_price(&self) -> f64 {
        self.total_price
    }
}

/// Service embedded in [`OrderDetails`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRef {
    /// Service name
    pub name: String,
    /// Service category
    pub category: Option<String>,
}

/// Partner embedded in [`OrderDetails`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRef {
    /// Partner's business name
    pub business_name: Option<String>,
}
