//! `serve`: expose sessions over the JSON API.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{api, config::Settings};

use super::{build_corpus, QnaArgs};

#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Every new session starts from built-in entries plus these files.
    #[command(flatten)]
    pub qna: QnaArgs,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let base = build_corpus(&settings, &args.qna);
    info!(base_entries = base.len(), policy = ?settings.policy, "session template ready");
    api::serve(settings, base, &args.host, args.port).await
}
