//! Devices command implementation

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::DeviceDisplay;
use crate::output::{json, table};

/// Run the devices command.
///
/// Always fetches from the API and rewrites the device cache.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.session();

    let credentials = session.credentials()?;
    let list = session.resolve_devices(&credentials, true).await?;

    debug!("Fetched {} devices", list.devices.len());

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<DeviceDisplay> = list.devices.iter().map(DeviceDisplay::from).collect();
            println!("{}", table::format_table(&rows, ctx.header));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&list)?);
        }
    }

    Ok(())
}
