//! Login display model

use tabled::Tabled;

use crate::client::models::LoginRecord;
use crate::output::formatters::format_unix_seconds_local;

/// Login result row for table output
#[derive(Debug, Clone, Tabled)]
pub struct LoginDisplay {
    #[tabled(rename = "TOKEN")]
    pub token: String,

    #[tabled(rename = "EXPIRY UNIX")]
    pub expiry_unix: i64,

    #[tabled(rename = "EXPIRY")]
    pub expiry: String,
}

impl From<&LoginRecord> for LoginDisplay {
    fn from(record: &LoginRecord) -> Self {
        Self {
            token: record.token.clone(),
            expiry_unix: record.auth_expiration,
            expiry: format_unix_seconds_local(record.auth_expiration),
        }
    }
}
