//! CLI entry-point for one-shot questions.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    cli::{build_session, ProfileArgs, QnaArgs},
    config::Settings,
    dialogue::render,
};

/// Args for the `ask` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// The question or complaint.
    pub text: String,
    /// Print the tagged response as JSON instead of text.
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub profile: ProfileArgs,
    #[command(flatten)]
    pub qna: QnaArgs,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mut session = build_session(&settings, &args.profile, &args.qna)?;
    let response = session.respond(&args.text);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render::render(&response));
    }
    Ok(())
}
