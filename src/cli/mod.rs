//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod cache;
pub mod completions;
pub mod connect;
pub mod context;
pub mod devices;
pub mod login;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// remote.it CLI - log in, list devices and open proxy connections
#[derive(Parser, Debug)]
#[command(name = "remoteit")]
#[command(
    version,
    about,
    long_about = "Command Line Interface for remote.it allowing login, device list, and connections"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "REMOTEIT_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Disable the header row in table output
    #[arg(long, global = true, env = "REMOTEIT_NO_HEADER", hide_env = true)]
    pub no_header: bool,

    /// API key for the remote.it API
    #[arg(
        long = "apikey",
        global = true,
        env = "REMOTEIT_APIKEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Session token (defaults to the token saved by `login`)
    #[arg(long, global = true, env = "REMOTEIT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "REMOTEIT_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override the config directory (default ~/.remoteit)
    #[arg(long, global = true, env = "REMOTEIT_CONFIG_DIR", hide_env = true)]
    pub config_dir: Option<String>,

    /// Log HTTP requests and responses to http.log in the config directory
    #[arg(long, global = true, env = "REMOTEIT_LOG_HTTP", hide_env = true)]
    pub log_http: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "REMOTEIT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and save the session token for later commands
    Login(LoginArgs),

    /// List devices registered to the account and refresh the local cache
    Devices,

    /// Create a proxy connection to a device
    Connect(ConnectArgs),

    /// Show configuration and saved session status
    Status,

    /// Manage the local device cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   remoteit completion bash > /etc/bash_completion.d/remoteit
  zsh:    remoteit completion zsh > \"${fpath[1]}/_remoteit\"
  fish:   remoteit completion fish > ~/.config/fish/completions/remoteit.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Arguments for `login`
#[derive(Debug, Clone, Args)]
pub struct LoginArgs {
    /// Account username
    #[arg(env = "REMOTEIT_USERNAME", hide_env = true)]
    pub username: Option<String>,

    /// Prompt for the password even if REMOTEIT_PASSWORD is set
    #[arg(long)]
    pub prompt: bool,
}

/// Arguments for `connect`
#[derive(Debug, Clone, Args)]
pub struct ConnectArgs {
    /// Alias of the device to connect to
    pub alias: String,

    /// Host IP to reach the device through (defaults to its last known IP)
    pub host_ip: Option<String>,

    /// Fetch the device list fresh instead of using the local cache
    #[arg(long)]
    pub no_cache: bool,

    /// Ask the service to wait for the proxy to come up
    #[arg(long)]
    pub wait: bool,

    /// Print the proxy as `<host> -p <port>` for use with ssh
    #[arg(long)]
    pub ssh: bool,
}

/// Device cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show the config directory holding the cache
    Path,

    /// Remove the cached device list
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_connect() {
        let cli = Cli::try_parse_from([
            "remoteit",
            "connect",
            "cam1",
            "192.168.1.1",
            "--no-cache",
            "--ssh",
        ])
        .unwrap();

        match cli.command {
            Commands::Connect(args) => {
                assert_eq!(args.alias, "cam1");
                assert_eq!(args.host_ip.as_deref(), Some("192.168.1.1"));
                assert!(args.no_cache);
                assert!(args.ssh);
                assert!(!args.wait);
            }
            other => panic!("Expected connect, got {:?}", other),
        }
    }

    #[test]
    fn test_connect_requires_alias() {
        assert!(Cli::try_parse_from(["remoteit", "connect"]).is_err());
    }

    #[test]
    fn test_parse_login_with_prompt() {
        let cli = Cli::try_parse_from(["remoteit", "login", "me@example.com", "--prompt"]).unwrap();

        match cli.command {
            Commands::Login(args) => {
                assert_eq!(args.username.as_deref(), Some("me@example.com"));
                assert!(args.prompt);
            }
            other => panic!("Expected login, got {:?}", other),
        }
    }

    #[test]
    fn test_login_has_no_password_flag() {
        assert!(
            Cli::try_parse_from(["remoteit", "login", "me@example.com", "--password", "pw"]).is_err()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["remoteit", "devices", "--format", "json", "--no-header"])
            .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_header);
    }
}
