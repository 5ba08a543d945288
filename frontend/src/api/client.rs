use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Thin wrapper over `reqwest::Client` bound to the SlotSwapper backend.
///
/// Every call is a single attempt: the session cookie rides along, non-2xx
/// responses become [`ApiError`] with the backend's text, and nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&raw).unwrap_or(raw)),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        with_credentials(request).send().await.map_err(|e| {
            log::warn!("Request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    pub(super) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(super) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await.map(|_| ())
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(status.as_u16(), &body);
        log::warn!("{} responded {}: {}", url, status.as_u16(), error);
        Err(error)
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}
