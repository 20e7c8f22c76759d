//! remoteit CLI - log in to remote.it, list devices and open proxy connections

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;
mod storage;

use cli::args::GlobalOptions;
use cli::{CacheCommands, Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login(ref args) => cli::login::run(&opts, args).await,
        Commands::Devices => cli::devices::run(&opts).await,
        Commands::Connect(ref args) => cli::connect::run(&opts, args).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Cache(ref cache_cmd) => match cache_cmd {
            CacheCommands::Path => cli::cache::path(&opts),
            CacheCommands::Clear => cli::cache::clear(&opts),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
        Commands::Version => {
            println!("remoteit version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Warnings by default, debug with `--debug`; `RUST_LOG` overrides both
fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}
