//! Authentication models

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Body of `POST /user/login`. The developer key travels as a header.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response, persisted as-is to the `login` record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRecord {
    #[serde(default)]
    pub status: String,

    /// Session token sent as the `token` header on authenticated calls
    pub token: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub guid: String,

    #[serde(default)]
    pub service_token: String,

    #[serde(default)]
    pub service_level: String,

    #[serde(default)]
    pub storage_plan: String,

    #[serde(default)]
    pub secondary_auth: String,

    #[serde(default)]
    pub apikey: String,

    #[serde(default)]
    pub auth_token: String,

    /// Token expiry in seconds since the Unix epoch
    #[serde(default)]
    pub auth_expiration: i64,

    #[serde(default)]
    pub service_authhash: String,

    #[serde(default)]
    pub developer_plan: String,

    #[serde(default)]
    pub portal_plan: String,

    #[serde(default, rename = "portal_plan_expires")]
    pub portal_plan_expiration: String,

    #[serde(default)]
    pub service_features: String,
}

/// Developer key plus session token, both required for device calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub token: String,
}

impl Credentials {
    /// Build credentials, rejecting empty values
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let token = token.into();

        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }
        if token.is_empty() {
            return Err(ConfigError::MissingToken.into());
        }

        Ok(Self { api_key, token })
    }
}
