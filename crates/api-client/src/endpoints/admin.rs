//! Admin endpoints

use crate::client::PlaReadyClient;
use crate::endpoints::orders::OrderSummary;
use crate::endpoints::{with_status_filter, MessageResponse};
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Admin API interface
#[derive(Clone)]
pub struct AdminApi {
    client: PlaReadyClient,
}

impl AdminApi {
    /// Create a new admin API interface
    pub(crate) fn new(client: PlaReadyClient) -> Self {
        Self { client }
    }

    /// All partner accounts
    ///
    /// GET /admin/partners
    pub async fn partners(&self) -> ApiResult<Vec<Partner>> {
        self.client.get("/admin/partners").await
    }

    /// Approve a pending partner
    ///
    /// PUT /admin/partners/:id/approve
    pub async fn approve_partner(&self, partner_id: i64) -> ApiResult<MessageResponse> {
        self.client
            .put_empty(&format!("/admin/partners/{partner_id}/approve"))
            .await
    }

    /// Most recent orders across all customers, optionally filtered by status
    ///
    /// GET /admin/orders[?status=]
    pub async fn orders(&self, status: Option<&str>) -> ApiResult<Vec<OrderSummary>> {
        self.client
            .get(&with_status_filter("/admin/orders", status))
            .await
    }

    /// Hand an order to a partner
    ///
    /// PUT /admin/orders/:id/assign
    pub async fn assign_partner(
        &self,
        order_id: i64,
        partner_id: i64,
    ) -> ApiResult<MessageResponse> {
        let body = AssignPartner { partner_id };
        self.client
            .put(&format!("/admin/orders/{order_id}/assign"), &body)
            .await
    }

    /// Headline numbers for the dashboard
    ///
    /// GET /admin/analytics
    pub async fn analytics(&self) -> ApiResult<Analytics> {
        self.client.get("/admin/analytics").await
    }
}

#[derive(Serialize)]
struct AssignPartner {
    partner_id: i64,
}

/// Partner account as seen by admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    /// Partner ID
    pub id: i64,
    /// Trading name
    pub business_name: Option<String>,
    /// City
    pub city: Option<String>,
    /// `pending`, `approved` or `rejected`
    pub status: String,
    /// Average customer rating
    #[serde(default)]
    pub rating: f64,
    /// Delivered orders
    #[serde(default)]
    pub total_orders: u64,
    /// Platform commission, percent
    #[serde(default)]
    pub commission_rate: f64,
    /// Application timestamp
    pub created_at: String,
}

/// Dashboard figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    /// Orders ever placed
    pub total_orders: u64,
    /// Sum of order totals
    pub total_revenue: f64,
    /// Approved partners
    pub active_partners: u64,
    /// Orders awaiting assignment
    pub pending_orders: u64,
}
