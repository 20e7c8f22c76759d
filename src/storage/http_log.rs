//! Opt-in trace of API traffic written to `http.log`

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;

use super::private_open_options;
use crate::error::StorageError;

/// Line prefix for every trace entry
const PREFIX: &str = "HTTPLOG";

/// Append-only HTTP trace.
///
/// Write failures are reported through `log::warn!` and never abort the
/// request being traced.
#[derive(Debug)]
pub struct HttpLog {
    file: Mutex<File>,
}

impl HttpLog {
    /// Open (or create) the trace file in append mode
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let file = private_open_options()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StorageError::from_io(path.to_path_buf(), e))?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Record an outgoing request. Pass `None` for bodies that must not be logged.
    pub fn request(&self, method: &str, url: &str, body: Option<&str>) {
        let line = match body {
            Some(body) => format!("> {} {} {}", method, url, body),
            None => format!("> {} {}", method, url),
        };
        self.write_line(&line);
    }

    /// Record a received response
    pub fn response(&self, status: u16, url: &str, body: &str) {
        self.write_line(&format!("< {} {} {}", status, url, body));
    }

    fn write_line(&self, line: &str) {
        let Ok(mut file) = self.file.lock() else {
            log::warn!("HTTP log lock poisoned, dropping entry");
            return;
        };

        let stamp = Utc::now().format("%Y/%m/%d %H:%M:%S");
        if let Err(e) = writeln!(file, "{} {} {}", PREFIX, stamp, line) {
            log::warn!("Failed to write HTTP log: {}", e);
        }
    }
}
