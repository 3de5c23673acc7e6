//! Command-line interface wiring for medqa-assistant.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::{
    advice::{profile::parse_codes, Sex, UserProfile},
    config::Settings,
    data::{self, Corpus},
    dialogue::Session,
};

pub mod ask;
pub mod chat;
pub mod corpus;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Offline Q&A and medicine guidance assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Name of the selected sub-command, for logging.
    pub fn command_name(&self) -> &'static str {
        match self.command {
            Commands::Ask(_) => "ask",
            Commands::Chat(_) => "chat",
            Commands::Corpus(_) => "corpus",
            Commands::Serve(_) => "serve",
        }
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Ask(args) => ask::run(args, settings).await,
            Commands::Chat(args) => chat::run(args, settings).await,
            Commands::Corpus(args) => corpus::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer a single question and exit.
    Ask(ask::Args),
    /// Interactive conversation on stdin.
    Chat(chat::Args),
    /// Show the active Q&A corpus.
    Corpus(corpus::Args),
    /// Serve the JSON API.
    Serve(serve::Args),
}

/// Health profile flags shared by conversational commands.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ProfileArgs {
    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,
    /// female, male or other.
    #[arg(long, default_value = "female")]
    pub sex: Sex,
    /// Body weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,
    /// Condition code, e.g. active_ulcer (repeatable).
    #[arg(long = "condition")]
    pub conditions: Vec<String>,
    /// Comma separated allergies, e.g. "penicillin, sulfa".
    #[arg(long, default_value = "")]
    pub allergies: String,
    /// Comma separated regular medications.
    #[arg(long, default_value = "")]
    pub meds: String,
}

impl ProfileArgs {
    /// Build and validate the profile these flags describe.
    pub fn to_profile(&self) -> Result<UserProfile> {
        let profile = UserProfile {
            age: self.age,
            sex: self.sex,
            weight_kg: self.weight,
            conditions: self
                .conditions
                .iter()
                .flat_map(|c| parse_codes(c))
                .collect(),
            allergies: parse_codes(&self.allergies),
            current_meds: parse_codes(&self.meds),
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Extra Q&A sources shared by commands that build a corpus.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct QnaArgs {
    /// Q&A file to merge (.csv, .json or .txt; repeatable).
    #[arg(long = "qna")]
    pub files: Vec<PathBuf>,
}

/// Corpus for a new session: built-in, then `MEDQA_QNA_DIR`, then `--qna` files.
pub fn build_corpus(settings: &Settings, qna: &QnaArgs) -> Corpus {
    data::seeded_corpus(settings, &qna.files)
}

/// Session seeded from settings and command-line flags.
pub fn build_session(
    settings: &Settings,
    profile: &ProfileArgs,
    qna: &QnaArgs,
) -> Result<Session> {
    let profile = profile.to_profile().context("invalid profile flags")?;
    let mut session = Session::new(build_corpus(settings, qna), settings.policy);
    session.profile = profile;
    Ok(session)
}
