//! Device API trait

use async_trait::async_trait;

use crate::client::models::{ConnectionGrant, Credentials, DeviceList};
use crate::error::Result;

/// Device operations for the remote.it API
#[async_trait]
pub trait DeviceApi: Send + Sync {
    /// List every device registered to the account
    async fn list_devices(&self, credentials: &Credentials) -> Result<DeviceList>;

    /// Request a temporary proxy to a device.
    ///
    /// `device_address` may be empty when only the host IP could be resolved.
    async fn connect(
        &self,
        credentials: &Credentials,
        device_address: &str,
        host_ip: &str,
        wait: bool,
    ) -> Result<ConnectionGrant>;
}
