//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config resolution, store setup and client initialization.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::RemoteItClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;
use crate::storage::Store;

/// Context for command execution containing config, store, client, and
/// output options.
pub struct CommandContext {
    /// Resolved configuration
    pub config: Config,
    /// Local store in the config directory
    pub store: Store,
    /// API client, tracing to http.log when enabled
    pub client: RemoteItClient,
    /// Output format preference
    pub format: OutputFormat,
    /// Whether table output includes a header row
    pub header: bool,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Resolving config from flags, environment and config file
    /// - Opening (and creating) the config directory
    /// - Creating the API client, with the HTTP trace attached if requested
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::resolve(opts)?;
        let store = Store::open_at(&config.config_dir)?;

        let mut client = RemoteItClient::new(&config.api_url)?;
        if config.log_http {
            client = client.with_http_log(store.http_log()?);
        }

        log::debug!(
            "Using API {} with config dir {}",
            client.base_url(),
            store.dir().display()
        );

        Ok(Self {
            config,
            store,
            client,
            format: opts.format,
            header: opts.header(),
        })
    }

    /// Session resolver over this context's client and store
    pub fn session(&self) -> Session<'_, RemoteItClient, Store> {
        Session::new(&self.client, &self.store, &self.config)
    }
}
