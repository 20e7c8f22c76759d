//! Connect command implementation

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, ConnectArgs, OutputFormat};
use crate::client::models::ConnectionInfo;
use crate::error::{Error, Result};
use crate::models::ConnectionDisplay;
use crate::output::{json, table};
use crate::session::resolve_device_target;

/// Run the connect command
pub async fn run(opts: &GlobalOptions, args: &ConnectArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.session();

    let credentials = session.credentials()?;
    let list = session.resolve_devices(&credentials, args.no_cache).await?;
    let target = resolve_device_target(&args.alias, args.host_ip.as_deref(), &list.devices)?;

    let grant = session.connect(&credentials, &target, args.wait).await?;

    if args.ssh {
        println!("{}", ssh_arguments(&grant.connection)?);
        return Ok(());
    }

    match ctx.format {
        OutputFormat::Table => {
            let rows = vec![ConnectionDisplay::from(&grant)];
            println!("{}", table::format_table(&rows, ctx.header));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&grant)?);
        }
    }

    Ok(())
}

/// `<host> -p <port>` for the proxy endpoint
fn ssh_arguments(connection: &ConnectionInfo) -> Result<String> {
    let (host, port) = connection.proxy_host_port().ok_or_else(|| {
        Error::Other(format!(
            "Proxy endpoint '{}' has no host and port",
            connection.proxy
        ))
    })?;
    Ok(format!("{} -p {}", host, port))
}
