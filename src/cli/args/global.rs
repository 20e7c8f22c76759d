//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are folded in
/// by [`Config::resolve`](crate::config::Config::resolve).
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Omit the header row from table output
    pub no_header: bool,

    /// Developer API key
    pub api_key: Option<String>,

    /// Explicit session token, bypassing the saved login
    pub token: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Config directory override (defaults to ~/.remoteit)
    pub config_dir: Option<String>,

    /// Trace HTTP traffic to http.log
    pub log_http: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            no_header: cli.no_header,
            api_key: cli.api_key.clone(),
            token: cli.token.clone(),
            api_url: cli.api_url.clone(),
            config_dir: cli.config_dir.clone(),
            log_http: cli.log_http,
        }
    }

    /// Get config directory override as `Option<&str>`.
    pub fn config_dir_ref(&self) -> Option<&str> {
        self.config_dir.as_deref()
    }

    /// Whether table output should include a header row
    pub fn header(&self) -> bool {
        !self.no_header
    }
}
