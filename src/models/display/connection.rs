//! Proxy connection display model

use tabled::Tabled;

use crate::client::models::ConnectionGrant;
use crate::output::formatters::format_duration_seconds;

/// Connection row for table output
#[derive(Debug, Clone, Tabled)]
pub struct ConnectionDisplay {
    #[tabled(rename = "PROXY")]
    pub proxy: String,

    #[tabled(rename = "DEVICE ADDRESS")]
    pub device_address: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "EXPIRES IN")]
    pub expires_in: String,

    #[tabled(rename = "REQUESTED")]
    pub requested_at: String,
}

impl From<&ConnectionGrant> for ConnectionDisplay {
    fn from(grant: &ConnectionGrant) -> Self {
        Self {
            proxy: grant.connection.proxy.clone(),
            device_address: grant.connection.device_address.clone(),
            status: grant.status.clone(),
            expires_in: format_duration_seconds(&grant.connection.expiration_secs),
            requested_at: grant.connection.requested_at.clone(),
        }
    }
}
