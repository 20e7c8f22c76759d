//! JSON output
//!
//! API responses are printed with their wire field names, wrapped in a
//! `{data, meta}` envelope so scripts can tell which CLI version produced them.

use chrono::Utc;
use serde::Serialize;

/// Envelope printed for `--format json`
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// API response, unchanged
    pub data: T,

    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,

    /// remoteit version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Pretty-print `data` inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
