//! Delivery partner endpoints

use crate::client::PlaReadyClient;
use crate::endpoints::orders::OrderSummary;
use crate::endpoints::{with_status_filter, MessageResponse};
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Partner API interface
#[derive(Clone)]
pub struct PartnerApi {
    client: PlaReadyClient,
}

impl PartnerApi {
    /// Create a new partner API interface
    pub(crate) fn new(client: PlaReadyClient) -> Self {
        Self { client }
    }

    /// Apply to become a delivery partner
    ///
    /// POST /partner/register. The application starts out pending until an
    /// admin approves it.
    pub async fn register(&self, registration: &PartnerRegistration) -> ApiResult<MessageResponse> {
        self.client.post("/partner/register", registration).await
    }

    /// Orders assigned to the logged-in partner, optionally filtered by status
    ///
    /// GET /partner/orders[?status=]
    pub async fn orders(&self, status: Option<&str>) -> ApiResult<Vec<OrderSummary>> {
        self.client
            .get(&with_status_filter("/partner/orders", status))
            .await
    }

    /// Move an assigned order to a new status
    ///
    /// PUT /partner/orders/:id/status
    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: &str,
    ) -> ApiResult<MessageResponse> {
        let body = StatusUpdate { status };
        self.client
            .put(&format!("/partner/orders/{order_id}/status"), &body)
            .await
    }
}

#[derive(Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

/// Partner application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerRegistration {
    /// Trading name shown to customers
    pub business_name: String,
    /// Workshop address
    pub address: String,
    /// City
    pub city: String,
    /// Postal code
    pub pincode: String,
    /// GST number, if registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    /// Payout account number
    pub bank_account: String,
    /// IFSC routing code of the payout account
    pub ifsc_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn partner_api(server: &MockServer) -> PartnerApi {
        PlaReadyClient::with_config(ClientConfig::default().with_origin(server.uri()))
            .unwrap()
            .partner()
    }

    #[tokio::test]
    async fn test_register() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/partner/register"))
            .and(body_json(json!({
                "business_name": "Smash Strings",
                "address": "Shop 3, FC Road",
                "city": "Pune",
                "pincode": "411004",
                "bank_account": "001234567890",
                "ifsc_code": "HDFC0000123"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Partner registration submitted for approval"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let registration = PartnerRegistration {
            business_name: "Smash Strings".to_string(),
            address: "Shop 3, FC Road".to_string(),
            city: "Pune".to_string(),
            pincode: "411004".to_string(),
            gst_number: None,
            bank_account: "001234567890".to_string(),
            ifsc_code: "HDFC0000123".to_string(),
        };
        let response = partner_api(&server).register(&registration).await.unwrap();

        assert_eq!(response.message, "Partner registration submitted for approval");
    }

    #[tokio::test]
    async fn test_orders_with_and_without_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/partner/orders"))
            .and(query_param("status", "picked_up"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "order_number": "PLR1", "customer_name": "Asha",
                 "service_name": "Grip Replacement", "status": "picked_up",
                 "total_price": 149.0, "pickup_slot": null, "created_at": "2024-02-01T08:00:00"}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/partner/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let api = partner_api(&server);

        let filtered = api.orders(Some("picked_up")).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].customer_name.as_deref(), Some("Asha"));

        let all = api.orders(None).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_update_order_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/partner/orders/17/status"))
            .and(body_json(json!({"status": "delivered"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Order status updated"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = partner_api(&server)
            .update_order_status(17, "delivered")
            .await
            .unwrap();
        assert_eq!(response.message, "Order status updated");
    }
}
