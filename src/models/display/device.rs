//! Device display model

use tabled::Tabled;

use crate::client::models::DeviceEntry;

/// Device row for table output
#[derive(Debug, Clone, Tabled)]
pub struct DeviceDisplay {
    #[tabled(rename = "ALIAS")]
    pub alias: String,

    #[tabled(rename = "ADDRESS")]
    pub address: String,

    #[tabled(rename = "SERVICE")]
    pub service: String,

    #[tabled(rename = "LAST IP")]
    pub last_ip: String,
}

impl From<&DeviceEntry> for DeviceDisplay {
    fn from(device: &DeviceEntry) -> Self {
        Self {
            alias: device.alias.clone(),
            address: device.address.clone(),
            service: device.service_title.clone(),
            last_ip: device.last_ip.clone(),
        }
    }
}
