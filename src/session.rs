//! Session resolution: cached state versus fresh API calls
//!
//! A [`Session`] answers "where does this command get its token and device
//! list from?". Local state in the [`RecordStore`] is preferred; the API is
//! only called when the store has nothing usable or the caller forces a
//! refresh, and whatever the API returns replaces the stored copy wholesale.

use crate::client::RemoteItApi;
use crate::client::models::{ConnectionGrant, Credentials, DeviceEntry, DeviceList, LoginRecord};
use crate::config::Config;
use crate::error::{ConfigError, Error, Result, StorageError};
use crate::storage::{RecordStore, StorageFile};

/// Resolved connect target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceTarget {
    /// Device address, empty when the alias was not found
    pub address: String,
    /// Host IP the proxy should reach the device through
    pub host_ip: String,
}

/// Credential and device-list resolver over an API client and a store
pub struct Session<'a, C, S> {
    client: &'a C,
    store: &'a S,
    api_key: Option<String>,
    token_override: Option<String>,
}

impl<'a, C: RemoteItApi, S: RecordStore> Session<'a, C, S> {
    pub fn new(client: &'a C, store: &'a S, config: &Config) -> Self {
        Self {
            client,
            store,
            api_key: config.api_key.clone(),
            token_override: config.token.clone(),
        }
    }

    /// The configured API key, or [`ConfigError::MissingApiKey`]
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey.into())
    }

    /// Authenticate and persist the login record.
    ///
    /// The store is only written after a successful response.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginRecord> {
        let api_key = self.require_api_key()?;

        let record = self.client.login(api_key, username, password).await?;
        self.store
            .write_record(StorageFile::Login, &serde_json::to_vec(&record)?)?;

        log::debug!("Saved login record for {}", username);
        Ok(record)
    }

    /// Token from `explicit` when non-empty, else from the stored login record
    pub fn resolve_token(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(token) = explicit.filter(|t| !t.is_empty()) {
            return Ok(token.to_string());
        }

        let data = match self.store.read_record(StorageFile::Login) {
            Ok(data) => data,
            Err(StorageError::NotFound(_)) => return Err(ConfigError::MissingToken.into()),
            Err(e) => return Err(e.into()),
        };

        let record: LoginRecord = serde_json::from_slice(&data)?;
        if record.token.is_empty() {
            return Err(ConfigError::MissingToken.into());
        }
        Ok(record.token)
    }

    /// API key plus the resolved token
    pub fn credentials(&self) -> Result<Credentials> {
        let api_key = self.require_api_key()?;
        let token = self.resolve_token(self.token_override.as_deref())?;
        Credentials::new(api_key, token)
    }

    /// Device list from the cache, or from the API when `force_refresh` is
    /// set or nothing is cached. Fetched lists overwrite the cache.
    pub async fn resolve_devices(
        &self,
        credentials: &Credentials,
        force_refresh: bool,
    ) -> Result<DeviceList> {
        if !force_refresh {
            match self.store.read_record(StorageFile::Devices) {
                Ok(data) => {
                    log::debug!("Cache hit: devices");
                    return Ok(serde_json::from_slice(&data)?);
                }
                Err(StorageError::NotFound(_)) => log::debug!("Cache miss: devices"),
                Err(e) => return Err(e.into()),
            }
        }

        let list = self.client.list_devices(credentials).await?;
        self.store
            .write_record(StorageFile::Devices, &serde_json::to_vec(&list)?)?;

        log::debug!("Cached {} devices", list.devices.len());
        Ok(list)
    }

    /// Request a proxy for a resolved target
    pub async fn connect(
        &self,
        credentials: &Credentials,
        target: &DeviceTarget,
        wait: bool,
    ) -> Result<ConnectionGrant> {
        self.client
            .connect(credentials, &target.address, &target.host_ip, wait)
            .await
    }
}

/// Match `alias` against `devices` (first match wins) and pick the host IP.
///
/// An explicit host IP overrides the device's last known IP. Only a missing
/// host IP is fatal: an unknown alias with an explicit IP resolves to an
/// empty address.
pub fn resolve_device_target(
    alias: &str,
    explicit_host_ip: Option<&str>,
    devices: &[DeviceEntry],
) -> Result<DeviceTarget> {
    let found = devices.iter().find(|d| d.alias == alias);

    let address = found.map(|d| d.address.clone()).unwrap_or_default();
    let host_ip = explicit_host_ip
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| found.map(|d| d.last_ip.clone()))
        .unwrap_or_default();

    if host_ip.is_empty() {
        return Err(Error::UnresolvedTarget {
            alias: alias.to_string(),
        });
    }

    if address.is_empty() {
        log::warn!("Device '{}' not found, connecting by host IP only", alias);
    }

    Ok(DeviceTarget { address, host_ip })
}
