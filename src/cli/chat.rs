//! CLI entry-point for an interactive conversation on stdin.

use std::path::Path;

use anyhow::Result;
use clap::Args as ClapArgs;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{info, instrument};

use crate::{
    cli::{build_session, ProfileArgs, QnaArgs},
    config::Settings,
    data::ingest,
    dialogue::{render, Role, Session},
};

/// Args for the `chat` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub profile: ProfileArgs,
    #[command(flatten)]
    pub qna: QnaArgs,
}

/// What a line of input asks the REPL to do.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Say(&'a str),
    Profile,
    Corpus,
    Load(&'a str),
    History,
    Quit,
    Skip,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Command::Skip;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Say(line);
    };
    let (name, arg) = rest.split_once(' ').unwrap_or((rest, ""));
    match (name, arg.trim()) {
        ("profile", _) => Command::Profile,
        ("corpus", _) => Command::Corpus,
        ("history", _) => Command::History,
        ("quit" | "exit", _) => Command::Quit,
        ("load", path) if !path.is_empty() => Command::Load(path),
        _ => Command::Unknown(line),
    }
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mut session = build_session(&settings, &args.profile, &args.qna)?;
    println!("{}", render::WELCOME);

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Say(text) => {
                let response = session.respond(text);
                println!("{}\n", render::render(&response));
            }
            Command::Profile => println!("{}\n", session.profile.recap()),
            Command::Corpus => print_corpus(&session),
            Command::Load(path) => {
                let accepted = session.merge(ingest::load_qna_file(Path::new(path)));
                println!("Added {accepted} Q&A entries ({} total).\n", session.corpus.len());
            }
            Command::History => print_history(&session),
            Command::Quit => break,
            Command::Skip => {}
            Command::Unknown(cmd) => {
                println!("Unknown command {cmd}. Try /profile, /corpus, /load <file>, /history or /quit.\n")
            }
        }
    }
    info!(turns = session.history().len(), "chat finished");
    Ok(())
}

fn print_corpus(session: &Session) {
    println!("Loaded Q&A: {} items", session.corpus.len());
    for entry in session.corpus.active().iter().take(3) {
        println!("Q: {}\nA: {}\n---", entry.question, entry.answer);
    }
}

fn print_history(session: &Session) {
    for turn in session.history() {
        let who = match turn.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        println!("[{}] {who}: {}", turn.at.format("%H:%M:%S"), turn.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_commands_are_recognised() {
        assert_eq!(parse_line("  "), Command::Skip);
        assert_eq!(parse_line("headache"), Command::Say("headache"));
        assert_eq!(parse_line("/load  faq.csv "), Command::Load("faq.csv"));
        assert_eq!(parse_line("/exit"), Command::Quit);
        assert_eq!(parse_line("/load"), Command::Unknown("/load"));
    }
}
