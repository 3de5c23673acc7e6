//! CLI entry-point for inspecting the active corpus.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    cli::{build_corpus, QnaArgs},
    config::Settings,
};

/// Args for the `corpus` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// How many entries to preview.
    #[arg(long, default_value_t = 3)]
    pub limit: usize,
    #[command(flatten)]
    pub qna: QnaArgs,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let corpus = build_corpus(&settings, &args.qna);
    println!("Loaded Q&A: {} items", corpus.len());
    for entry in corpus.active().iter().take(args.limit) {
        println!("---\nQ: {}\nA: {}\nsource: {}", entry.question, entry.answer, entry.source);
    }
    Ok(())
}
