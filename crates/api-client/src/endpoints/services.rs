//! Service catalogue endpoints

use crate::client::PlaReadyClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Services API interface
#[derive(Clone)]
pub struct ServicesApi {
    client: PlaReadyClient,
}

impl ServicesApi {
    /// Create a new services API interface
    pub(crate) fn new(client: PlaReadyClient) -> Self {
        Self { client }
    }

    /// List active services
    ///
    /// GET /services
    pub async fn get_all(&self) -> ApiResult<Vec<Service>> {
        self.client.get("/services").await
    }

    /// Find a service by ID
    ///
    /// There is no single-service route, so this fetches the whole catalogue
    /// and scans it.
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Option<Service>> {
        let services = self.get_all().await?;
        Ok(services.into_iter().find(|service| service.id == id))
    }
}

/// A bookable service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service ID
    pub id: i64,
    /// Display name, e.g. "Badminton Restringing"
    pub name: String,
    /// `stringing`, `grip` or `repair`
    pub category: Option<String>,
    /// Price before strings and discounts
    pub base_price: f64,
    /// Longer description
    pub description: Option<String>,
    /// Illustration URL
    pub image_url: Option<String>,
}
