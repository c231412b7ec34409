//! Start the FieldHub server.

use clap::Args;

use fieldhub_core::error::AppError;

use super::Cli;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
///
/// Pending migrations are not applied; run `migrate run` first.
pub async fn execute(args: &ServeArgs, cli: &Cli) -> Result<(), AppError> {
    let mut config = cli.load_config()?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    fieldhub_api::init_logging(&config.logging);

    let db = super::connect(&config).await?;
    fieldhub_api::run_server(config, db).await
}
