//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{AdminApi, AuthApi, CouponsApi, OrdersApi, PartnerApi, ServicesApi};
use crate::error::{ApiError, ApiResult, ErrorContext, FALLBACK_ERROR_MESSAGE};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// PlaReady API client
///
/// Every request carries the client's cookie jar, so a session established by
/// [`AuthApi::login`] is sent with later calls. Clones share the jar.
///
/// Failures are returned exactly once: there is no retry, and no timeout
/// unless one is configured.
#[derive(Clone)]
pub struct PlaReadyClient {
    inner: Client,
    config: Arc<ClientConfig>,
    base_url: Arc<str>,
    cookies: Arc<Jar>,
}

impl PlaReadyClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let base_url = config.base_url();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let cookies = Arc::new(Jar::default());

        let mut builder = Client::builder()
            .default_headers(default_headers)
            .user_agent(config.user_agent.clone())
            .cookie_provider(Arc::clone(&cookies));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder.build().map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            base_url: base_url.into(),
            cookies,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL (`<origin>/api`)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access authentication endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the service catalogue
    #[must_use]
    pub fn services(&self) -> ServicesApi {
        ServicesApi::new(self.clone())
    }

    /// Access customer order endpoints
    #[must_use]
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.clone())
    }

    /// Access coupon endpoints
    #[must_use]
    pub fn coupons(&self) -> CouponsApi {
        CouponsApi::new(self.clone())
    }

    /// Access delivery partner endpoints
    #[must_use]
    pub fn partner(&self) -> PartnerApi {
        PartnerApi::new(self.clone())
    }

    /// Access admin endpoints
    #[must_use]
    pub fn admin(&self) -> AdminApi {
        AdminApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Session cookies
    // -------------------------------------------------------------------------

    /// Cookie header the client would send to the API, if any
    #[must_use]
    pub fn session_cookies(&self) -> Option<String> {
        let url = self.cookie_url().ok()?;
        self.cookies
            .cookies(&url)
            .and_then(|value| value.to_str().ok().map(String::from))
    }

    /// Seed the cookie jar from a header previously returned by
    /// [`session_cookies`](Self::session_cookies)
    pub fn restore_session(&self, cookie_header: &str) -> ApiResult<()> {
        let url = self.cookie_url()?;
        for cookie in cookie_header.split(';').map(str::trim).filter(|c| !c.is_empty()) {
            self.cookies.add_cookie_str(cookie, &url);
        }
        debug!(url = %url, "Restored session cookies");
        Ok(())
    }

    fn cookie_url(&self) -> ApiResult<Url> {
        let url = format!("{}/", self.base_url);
        Url::parse(&url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))
    }

    // -------------------------------------------------------------------------
    // Request primitive
    // -------------------------------------------------------------------------

    /// Perform a GET request
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(Method::GET, endpoint, Option::<&()>::None).await
    }

    /// Perform a POST request with a JSON body
    #[instrument(skip(self, body))]
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// Perform a POST request without a body
    #[instrument(skip(self))]
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(Method::POST, endpoint, Option::<&()>::None).await
    }

    /// Perform a PUT request with a JSON body
    #[instrument(skip(self, body))]
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// Perform a PUT request without a body
    #[instrument(skip(self))]
    pub async fn put_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(Method::PUT, endpoint, Option::<&()>::None).await
    }

    /// Issue a request against `<base_url><endpoint>`
    ///
    /// A present body is sent as JSON. A success response is parsed into `T`;
    /// a failure response becomes [`ApiError::ApiResponse`] carrying the
    /// server's `error` text. Every failure is logged before it is returned.
    pub async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let request_id = Uuid::new_v4().to_string();

        let start = Instant::now();
        let result = self.execute(&request_id, method.clone(), &url, body).await;

        match &result {
            Ok(_) => debug!(
                request_id = %request_id,
                method = %method,
                url = %url,
                elapsed_ms = start.elapsed().as_millis(),
                "Request succeeded"
            ),
            Err(e) => {
                let context = ErrorContext {
                    request_id,
                    endpoint: endpoint.to_string(),
                    method: method.to_string(),
                };
                error!(context = %context, url = %url, error = %e, "API request failed");
            }
        }

        result
    }

    async fn execute<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        request_id: &str,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let mut request = self
            .inner
            .request(method, url)
            .header(X_REQUEST_ID, request_id);

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        handle_response(response).await
    }
}

/// Turn an HTTP response into the caller's value or an [`ApiError`]
async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&body)?);
    }

    let envelope: Value = serde_json::from_slice(&body)?;
    let message = envelope
        .get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_ERROR_MESSAGE);

    Err(ApiError::api_response(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> PlaReadyClient {
        PlaReadyClient::with_config(ClientConfig::default().with_origin(server.uri())).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = PlaReadyClient::with_config(ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let result = PlaReadyClient::with_config(ClientConfig::default().with_origin("localhost"));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn test_success_body_is_returned_unchanged() {
        let server = MockServer::start().await;
        let payload = json!({
            "nested": {"list": [1, 2.5, "three", null, true]},
            "empty": {}
        });
        Mock::given(method("GET"))
            .and(path("/api/anything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let value: Value = client.get("/anything").await.unwrap();

        assert_eq!(value, payload);
    }

    #[tokio::test]
    async fn test_body_and_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/echo"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"code": "FIRST50"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let value: Value = client
            .post("/echo", &json!({"code": "FIRST50"}))
            .await
            .unwrap();

        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_bodyless_request_still_declares_json() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/admin/partners/3/approve"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let _: Value = client.put_empty("/admin/partners/3/approve").await.unwrap();
    }

    #[tokio::test]
    async fn test_error_field_becomes_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders/9"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Order not found"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get::<Value>("/orders/9").await.unwrap_err();

        assert_eq!(err.to_string(), "Order not found");
        assert!(matches!(err, ApiError::ApiResponse { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_missing_error_field_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/analytics"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get::<Value>("/admin/analytics").await.unwrap_err();

        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_json_error_body_propagates_parse_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/services"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get::<Value>("/services").await.unwrap_err();

        assert!(matches!(err, ApiError::Json(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1
        let client =
            PlaReadyClient::with_config(ClientConfig::default().with_origin("http://127.0.0.1:1"))
                .unwrap();
        let err = client.get::<Value>("/auth/me").await.unwrap_err();

        assert!(matches!(err, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn test_session_cookie_roundtrip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc123; Path=/; HttpOnly")
                    .set_body_json(json!({"message": "Login successful"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("cookie", "session=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let _: Value = client.post_empty("/auth/login").await.unwrap();

        let saved = client.session_cookies().unwrap();
        assert_eq!(saved, "session=abc123");

        let fresh = client_for(&server).await;
        assert!(fresh.session_cookies().is_none());
        fresh.restore_session(&saved).unwrap();
        let _: Value = fresh.get("/auth/me").await.unwrap();
    }
}
