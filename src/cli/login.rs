//! Login command implementation

use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, LoginArgs, OutputFormat};
use crate::error::{ConfigError, Result};
use crate::models::LoginDisplay;
use crate::output::{json, table};

/// Environment variable holding the account password
const PASSWORD_ENV: &str = "REMOTEIT_PASSWORD";

/// Run the login command
pub async fn run(opts: &GlobalOptions, args: &LoginArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.session();

    // Fail before prompting for anything
    session.require_api_key()?;

    let username = args
        .username
        .clone()
        .or_else(|| ctx.config.username.clone())
        .filter(|u| !u.is_empty())
        .ok_or(ConfigError::MissingUsername)?;

    let password = match env_password(args.prompt) {
        Some(pw) => pw,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter password")
            .interact()?,
    };
    if password.is_empty() {
        return Err(ConfigError::MissingPassword.into());
    }

    let record = session.login(&username, &password).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows = vec![LoginDisplay::from(&record)];
            println!("{}", table::format_table(&rows, ctx.header));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&record)?);
        }
    }

    Ok(())
}

/// Password from the environment, unless a prompt was requested
fn env_password(prompt: bool) -> Option<String> {
    if prompt {
        return None;
    }
    std::env::var(PASSWORD_ENV).ok().filter(|pw| !pw.is_empty())
}
