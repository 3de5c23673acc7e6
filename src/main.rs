use anyhow::{Context, Result};
use medqa_assistant::{cli::Cli, config::Settings, logging};
use tracing::{debug, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing()?;
    let settings = Settings::load().context("invalid MEDQA_* configuration")?;

    debug!(?settings, command = cli.command_name(), "dispatching");
    cli.dispatch(settings).await
}
