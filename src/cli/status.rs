//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{DeviceList, LoginRecord};
use crate::error::Result;
use crate::output::formatters::format_unix_seconds_local;
use crate::storage::{RecordStore, Store, StorageFile};

/// Run the status command to display configuration and session state
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let login = read_login(&ctx.store);
    let devices = read_device_count(&ctx.store);
    let config_file = ctx.config.config_file();

    if ctx.format == OutputFormat::Json {
        let json = serde_json::json!({
            "config_dir": ctx.store.dir().display().to_string(),
            "config_file": config_file.exists().then(|| config_file.display().to_string()),
            "api_url": ctx.config.api_url,
            "api_key_configured": ctx.config.api_key.is_some(),
            "token_override": ctx.config.token.is_some(),
            "login_cached": login.is_some(),
            "token_expires": login.as_ref().map(|l| l.auth_expiration),
            "device_cache": devices,
            "log_http": ctx.config.log_http,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}\n", "remote.it CLI Status".bold());
    println!("Config dir: {}", ctx.store.dir().display().to_string().cyan());
    if config_file.exists() {
        println!("Config file: {}", config_file.display().to_string().cyan());
    }
    println!("API URL: {}", ctx.config.api_url.cyan());
    println!();

    if ctx.config.api_key.is_some() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Pass --apikey or set REMOTEIT_APIKEY");
    }

    if ctx.config.token.is_some() {
        println!("{} Using token from --token / REMOTEIT_TOKEN", "○".dimmed());
    }

    match login {
        Some(record) if !record.token.is_empty() => {
            let now = chrono::Utc::now().timestamp();
            if record.auth_expiration != 0 && record.auth_expiration < now {
                println!(
                    "{} Saved login expired at {}",
                    "⚠".yellow(),
                    format_unix_seconds_local(record.auth_expiration)
                );
                println!("  → Run 'remoteit login' to refresh it");
            } else {
                println!(
                    "{} Saved login valid (expires {})",
                    "✓".green(),
                    format_unix_seconds_local(record.auth_expiration)
                );
            }
        }
        _ => {
            println!("{} No saved login", "✗".red());
            println!("  → Run 'remoteit login' to create one");
        }
    }

    match devices {
        Some(count) => println!("{} Device cache holds {} devices", "✓".green(), count),
        None => println!("{} No device cache (next connect will fetch)", "○".dimmed()),
    }

    if ctx.config.log_http {
        println!(
            "{} HTTP trace: {}",
            "○".dimmed(),
            ctx.store.path(StorageFile::HttpLog).display()
        );
    }

    println!();
    Ok(())
}

/// Saved login record, if present and readable
fn read_login(store: &Store) -> Option<LoginRecord> {
    let data = store.read_record(StorageFile::Login).ok()?;
    serde_json::from_slice(&data).ok()
}

/// Number of cached devices, if a readable cache exists
fn read_device_count(store: &Store) -> Option<usize> {
    if !store.exists(StorageFile::Devices) {
        return None;
    }
    let data = store.read_record(StorageFile::Devices).ok()?;
    serde_json::from_slice::<DeviceList>(&data)
        .ok()
        .map(|list| list.devices.len())
}
