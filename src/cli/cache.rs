//! Device cache management commands

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::storage::StorageFile;

/// Show the directory holding the cache
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    println!("{}", ctx.store.dir().display());
    Ok(())
}

/// Remove the cached device list
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let removed = ctx.store.remove_record(StorageFile::Devices)?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "removed": removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => {
            if removed {
                println!("Cleared device cache");
            } else {
                println!("Device cache was already empty");
            }
        }
    }

    Ok(())
}
