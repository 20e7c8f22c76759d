//! Mock remote.it API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, DeviceApi};
use super::models::{ConnectionGrant, ConnectionInfo, Credentials, DeviceEntry, DeviceList, LoginRecord};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockRemoteItClient::new().with_devices(vec![device("cam1", "80:00:01", "10.0.0.5")]);
///
/// let list = mock.list_devices(&creds).await?;
/// assert_eq!(list.devices.len(), 1);
/// ```
#[derive(Default)]
pub struct MockRemoteItClient {
    /// Record returned from login
    login: Arc<Mutex<Option<LoginRecord>>>,
    /// Devices returned from list_devices
    devices: Arc<Mutex<Vec<DeviceEntry>>>,
    /// Proxy endpoint returned from connect
    proxy: Arc<Mutex<String>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub list_devices: usize,
    pub connect: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login + self.list_devices + self.connect
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "login", "connect")
    pub method: String,
    /// Developer key sent with the request
    pub api_key: String,
    /// Session token, if the call was authenticated
    pub token: Option<String>,
    /// Device address for connect
    pub device_address: Option<String>,
    /// Host IP for connect
    pub host_ip: Option<String>,
}

impl MockRemoteItClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this record from `login`
    pub fn with_login(self, record: LoginRecord) -> Self {
        *self.login.try_lock().expect("mock not shared yet") = Some(record);
        self
    }

    /// Return these devices from `list_devices`
    pub fn with_devices(self, devices: Vec<DeviceEntry>) -> Self {
        *self.devices.try_lock().expect("mock not shared yet") = devices;
        self
    }

    /// Return this proxy endpoint from `connect`
    pub fn with_proxy(self, proxy: &str) -> Self {
        *self.proxy.try_lock().expect("mock not shared yet") = proxy.to_string();
        self
    }

    /// Fail the next call with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    async fn capture(&self, request: CapturedRequest) {
        self.captured_requests.lock().await.push(request);
    }
}

#[async_trait]
impl AuthApi for MockRemoteItClient {
    async fn login(&self, api_key: &str, username: &str, _password: &str) -> Result<LoginRecord> {
        self.call_count.lock().await.login += 1;
        self.capture(CapturedRequest {
            method: "login".to_string(),
            api_key: api_key.to_string(),
            token: None,
            device_address: None,
            host_ip: None,
        })
        .await;
        self.take_error().await?;

        let record = self.login.lock().await.clone();
        Ok(record.unwrap_or_else(|| LoginRecord {
            status: "true".to_string(),
            token: format!("token-for-{}", username),
            ..Default::default()
        }))
    }
}

#[async_trait]
impl DeviceApi for MockRemoteItClient {
    async fn list_devices(&self, credentials: &Credentials) -> Result<DeviceList> {
        self.call_count.lock().await.list_devices += 1;
        self.capture(CapturedRequest {
            method: "list_devices".to_string(),
            api_key: credentials.api_key.clone(),
            token: Some(credentials.token.clone()),
            device_address: None,
            host_ip: None,
        })
        .await;
        self.take_error().await?;

        Ok(DeviceList {
            status: "true".to_string(),
            devices: self.devices.lock().await.clone(),
        })
    }

    async fn connect(
        &self,
        credentials: &Credentials,
        device_address: &str,
        host_ip: &str,
        _wait: bool,
    ) -> Result<ConnectionGrant> {
        self.call_count.lock().await.connect += 1;
        self.capture(CapturedRequest {
            method: "connect".to_string(),
            api_key: credentials.api_key.clone(),
            token: Some(credentials.token.clone()),
            device_address: Some(device_address.to_string()),
            host_ip: Some(host_ip.to_string()),
        })
        .await;
        self.take_error().await?;

        Ok(ConnectionGrant {
            status: "true".to_string(),
            connection: ConnectionInfo {
                device_address: device_address.to_string(),
                expiration_secs: "28800".to_string(),
                proxy: self.proxy.lock().await.clone(),
                ..Default::default()
            },
        })
    }
}

/// Build a device entry for tests
pub fn device(alias: &str, address: &str, last_ip: &str) -> DeviceEntry {
    DeviceEntry {
        alias: alias.to_string(),
        address: address.to_string(),
        last_ip: last_ip.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let mock = MockRemoteItClient::new().with_devices(vec![device("cam1", "80:00:01", "")]);
        let creds = Credentials::new("key", "tok").unwrap();

        mock.list_devices(&creds).await.unwrap();
        mock.connect(&creds, "80:00:01", "10.0.0.5", false).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_devices, 1);
        assert_eq!(counts.connect, 1);
        assert_eq!(counts.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockRemoteItClient::new().with_error(ApiError::Network("down".to_string()));
        let creds = Credentials::new("key", "tok").unwrap();

        assert!(matches!(
            mock.list_devices(&creds).await,
            Err(Error::Api(ApiError::Network(_)))
        ));
        assert!(mock.list_devices(&creds).await.is_ok());
    }
}
