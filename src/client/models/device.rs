//! Device models

use serde::{Deserialize, Serialize};

/// One device registered to the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceEntry {
    /// Stable server-assigned identifier
    #[serde(rename = "deviceaddress")]
    pub address: String,

    /// Human label, used as the lookup key for `connect`
    #[serde(rename = "devicealias")]
    pub alias: String,

    #[serde(rename = "deviceusername")]
    pub username: String,

    #[serde(rename = "devicetype")]
    pub device_type: String,

    #[serde(rename = "devicelastip")]
    pub last_ip: String,

    #[serde(rename = "servicetitle")]
    pub service_title: String,

    #[serde(rename = "webenabled")]
    pub web_enabled: String,

    #[serde(rename = "localuri")]
    pub local_uri: String,
}

/// Response envelope of `GET /device/list/all`.
///
/// The whole envelope is what gets cached, not just the device array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceList {
    #[serde(default)]
    pub status: String,

    pub devices: Vec<DeviceEntry>,
}
