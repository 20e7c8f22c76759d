//! Configuration management for remoteit
//!
//! Settings are layered: CLI flag > environment variable > config file >
//! default. Flags and environment variables are merged by clap into
//! [`GlobalOptions`]; this module folds in `config.yaml` from the config
//! directory and produces the [`Config`] that is passed into the client and
//! session constructors.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::args::GlobalOptions;
use crate::client::DEFAULT_API_URL;
use crate::error::{ConfigError, Result};
use crate::storage::Store;

/// Name of the optional settings file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Settings read from `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// remote.it developer API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Override for the API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Default username for `login`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Trace HTTP traffic to `http.log`
    #[serde(default)]
    pub log_http: bool,
}

impl FileConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FileConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }
}

/// Resolved runtime configuration, built once per invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Developer API key, if configured anywhere
    pub api_key: Option<String>,

    /// Explicit session token overriding the cached login
    pub token: Option<String>,

    /// API base URL
    pub api_url: String,

    /// Default username for `login`
    pub username: Option<String>,

    /// Directory holding `login`, `devices`, `http.log` and `config.yaml`
    pub config_dir: PathBuf,

    /// Trace HTTP traffic to `http.log`
    pub log_http: bool,
}

impl Config {
    /// Resolve configuration from global options and the config file
    pub fn resolve(opts: &GlobalOptions) -> Result<Self> {
        let config_dir = match opts.config_dir_ref() {
            Some(dir) => PathBuf::from(dir),
            None => Store::default_dir()?,
        };

        let file = FileConfig::load_from(&config_dir.join(CONFIG_FILE_NAME))?;
        Ok(Self::merge(opts, file, config_dir))
    }

    /// Merge options over file settings
    fn merge(opts: &GlobalOptions, file: FileConfig, config_dir: PathBuf) -> Self {
        Self {
            api_key: non_empty(opts.api_key.clone()).or(non_empty(file.api_key)),
            token: non_empty(opts.token.clone()),
            api_url: non_empty(opts.api_url.clone())
                .or(non_empty(file.api_url))
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            username: non_empty(file.username),
            config_dir,
            log_http: opts.log_http || file.log_http,
        }
    }

    /// Path of the settings file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::TempDir;

    fn opts() -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Table,
            no_header: false,
            api_key: None,
            token: None,
            api_url: None,
            config_dir: None,
            log_http: false,
        }
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = FileConfig::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "api_key: file-key\napi_url: http://localhost:9000\nusername: me@example.com\nlog_http: true\n",
        )
        .unwrap();

        let config = FileConfig::load_from(&path).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.username.as_deref(), Some("me@example.com"));
        assert!(config.log_http);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_key: [unclosed").unwrap();

        match FileConfig::load_from(&path) {
            Err(crate::error::Error::Config(ConfigError::ParseError(_))) => (),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_when_nothing_configured() {
        let config = Config::merge(&opts(), FileConfig::default(), PathBuf::from("/tmp/r"));

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_none());
        assert!(config.token.is_none());
        assert!(!config.log_http);
        assert_eq!(config.config_file(), PathBuf::from("/tmp/r/config.yaml"));
    }

    #[test]
    fn test_options_override_file() {
        let mut opts = opts();
        opts.api_key = Some("flag-key".to_string());
        opts.api_url = Some("http://flag".to_string());

        let file = FileConfig {
            api_key: Some("file-key".to_string()),
            api_url: Some("http://file".to_string()),
            username: Some("me".to_string()),
            log_http: true,
        };

        let config = Config::merge(&opts, file, PathBuf::from("/tmp/r"));

        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
        assert_eq!(config.api_url, "http://flag");
        assert_eq!(config.username.as_deref(), Some("me"));
        assert!(config.log_http);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let mut opts = opts();
        opts.api_key = Some(String::new());
        opts.token = Some("  ".to_string());

        let file = FileConfig {
            api_key: Some("file-key".to_string()),
            ..Default::default()
        };

        let config = Config::merge(&opts, file, PathBuf::from("/tmp/r"));

        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_resolve_reads_config_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "api_key: from-dir\n").unwrap();

        let mut opts = opts();
        opts.config_dir = Some(dir.path().to_string_lossy().to_string());

        let config = Config::resolve(&opts).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("from-dir"));
        assert_eq!(config.config_dir, dir.path());
    }
}
