//! remote.it API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::api::{AuthApi, DeviceApi};
use super::models::{ConnectRequest, ConnectionGrant, Credentials, DeviceList, LoginRecord, LoginRequest};
use crate::error::{ApiError, Result};
use crate::storage::HttpLog;

/// Default remote.it API base URL
pub const DEFAULT_API_URL: &str = "https://api.remot3.it/apv/v23.5";

const DEV_KEY_HEADER: &str = "developerkey";
const TOKEN_HEADER: &str = "token";
const JSON_CONTENT_TYPE: &str = "application/json";

/// remote.it API client.
///
/// Every call is exactly one HTTP round trip. Nothing is retried.
pub struct RemoteItClient {
    http: HttpClient,
    base_url: String,
    http_log: Option<HttpLog>,
}

impl RemoteItClient {
    /// Create a client against `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            http_log: None,
        })
    }

    /// Trace every request and response to `log`
    pub fn with_http_log(mut self, log: HttpLog) -> Self {
        self.http_log = Some(log);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request carrying the developer key and JSON content type
    fn request(&self, method: Method, path: &str, api_key: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(DEV_KEY_HEADER, api_key)
            .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
    }

    /// Build a request that also carries the session token
    fn authed_request(&self, method: Method, path: &str, credentials: &Credentials) -> RequestBuilder {
        self.request(method, path, &credentials.api_key)
            .header(TOKEN_HEADER, &credentials.token)
    }

    /// Send a request and decode a 200 response body into `T`.
    ///
    /// `trace_body` is what gets written to the HTTP log for the request
    /// body; pass `None` to keep it out of the log.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        trace_body: Option<&str>,
    ) -> Result<T> {
        let request = builder.build().map_err(ApiError::from)?;
        let method = request.method().clone();
        let url = request.url().to_string();

        log::debug!("{} {}", method, url);
        if let Some(ref http_log) = self.http_log {
            http_log.request(method.as_str(), &url, trace_body);
        }

        let response = self.http.execute(request).await.map_err(ApiError::from)?;
        let status = response.status();

        if status != StatusCode::OK {
            log::debug!("{} {} returned {}", method, url, status);
            if let Some(ref http_log) = self.http_log {
                // Best effort: the status decides the error, not the body
                let body = response.text().await.unwrap_or_default();
                http_log.response(status.as_u16(), &url, &body);
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
            .into());
        }

        let body = response.text().await.map_err(ApiError::from)?;

        if let Some(ref http_log) = self.http_log {
            http_log.response(status.as_u16(), &url, &body);
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e)).into()
        })
    }
}

#[async_trait]
impl AuthApi for RemoteItClient {
    async fn login(&self, api_key: &str, username: &str, password: &str) -> Result<LoginRecord> {
        let body = serde_json::to_string(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;

        let builder = self.request(Method::POST, "/user/login", api_key).body(body);

        // Credentials stay out of the trace
        self.send(builder, None).await
    }
}

#[async_trait]
impl DeviceApi for RemoteItClient {
    async fn list_devices(&self, credentials: &Credentials) -> Result<DeviceList> {
        let builder = self.authed_request(Method::GET, "/device/list/all", credentials);
        self.send(builder, None).await
    }

    async fn connect(
        &self,
        credentials: &Credentials,
        device_address: &str,
        host_ip: &str,
        wait: bool,
    ) -> Result<ConnectionGrant> {
        let body = serde_json::to_string(&ConnectRequest::new(device_address, host_ip, wait))?;

        let builder = self
            .authed_request(Method::POST, "/device/connect", credentials)
            .body(body.clone());
        self.send(builder, Some(&body)).await
    }
}
