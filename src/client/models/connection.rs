//! Proxy connection models

use serde::{Deserialize, Serialize};

/// Body of `POST /device/connect`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectRequest {
    #[serde(rename = "deviceaddress")]
    pub device_address: String,

    #[serde(rename = "hostip")]
    pub host_ip: String,

    /// The API takes this flag as a string
    pub wait: String,
}

impl ConnectRequest {
    pub fn new(device_address: &str, host_ip: &str, wait: bool) -> Self {
        Self {
            device_address: device_address.to_string(),
            host_ip: host_ip.to_string(),
            wait: wait.to_string(),
        }
    }
}

/// Response envelope of `POST /device/connect`. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGrant {
    #[serde(default)]
    pub status: String,

    pub connection: ConnectionInfo,
}

/// Proxy descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionInfo {
    #[serde(rename = "deviceaddress")]
    pub device_address: String,

    #[serde(rename = "expirationsec")]
    pub expiration_secs: String,

    #[serde(rename = "imageintervalms")]
    pub image_interval_ms: String,

    /// Proxy endpoint, usually `http://host:port`
    pub proxy: String,

    #[serde(rename = "requested")]
    pub requested_at: String,
}

impl ConnectionInfo {
    /// Split the proxy endpoint into host and port, dropping any URL scheme
    pub fn proxy_host_port(&self) -> Option<(&str, &str)> {
        let endpoint = self
            .proxy
            .strip_prefix("http://")
            .or_else(|| self.proxy.strip_prefix("https://"))
            .unwrap_or(&self.proxy);
        let endpoint = endpoint.trim_end_matches('/');

        let (host, port) = endpoint.rsplit_once(':')?;
        if host.is_empty() || port.is_empty() {
            return None;
        }
        Some((host, port))
    }
}
