//! Explicit per-session context: profile, corpus, policy and history.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{handle_utterance, render, Response};
use crate::{
    advice::UserProfile,
    config::RetrievalPolicy,
    data::{ingest, Corpus, QnaEntry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One line of the conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// State owned by a single conversation. Sessions share nothing.
#[derive(Debug, Clone)]
pub struct Session {
    pub profile: UserProfile,
    pub corpus: Corpus,
    pub policy: RetrievalPolicy,
    history: Vec<Turn>,
    last_active: Instant,
}

impl Session {
    pub fn new(corpus: Corpus, policy: RetrievalPolicy) -> Self {
        Self {
            profile: UserProfile::default(),
            corpus,
            policy,
            history: Vec::new(),
            last_active: Instant::now(),
        }
    }

    /// Route an utterance and record both sides of the exchange.
    pub fn respond(&mut self, text: &str) -> Response {
        let response = handle_utterance(text, &self.profile, &self.corpus, &self.policy);
        self.push(Role::User, text.to_string());
        self.push(Role::Assistant, render::render(&response));
        response
    }

    /// Parse an uploaded file and merge it; returns the number of new entries.
    pub fn ingest(&mut self, file_name: &str, raw: &[u8]) -> usize {
        self.merge(ingest::load_qna_bytes(file_name, raw))
    }

    pub fn merge(&mut self, entries: Vec<QnaEntry>) -> usize {
        self.last_active = Instant::now();
        let accepted = self.corpus.merge(entries);
        info!(accepted, corpus = self.corpus.len(), "session corpus updated");
        accepted
    }

    /// Replace the profile and note it in the transcript.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        let recap = self.profile.recap();
        self.push(Role::Assistant, recap);
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Time since the last utterance, profile change or merge.
    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }

    fn push(&mut self, role: Role, text: String) {
        self.last_active = Instant::now();
        self.history.push(Turn {
            role,
            text,
            at: Utc::now(),
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Corpus::with_builtin(), RetrievalPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respond_records_both_turns() {
        let mut session = Session::default();
        let response = session.respond("xyzxyz nonsense");
        assert_eq!(response, Response::Fallback);
        let roles: Vec<_> = session.history().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(session.history()[1].text, render::FALLBACK);
    }

    #[test]
    fn uploads_merge_into_the_session_corpus() {
        let mut session = Session::default();
        let before = session.corpus.len();
        let accepted = session.ingest("extra.txt", b"What is fever? ::: A raised body temperature.");
        assert_eq!(accepted, 1);
        assert_eq!(session.corpus.len(), before + 1);
        assert_eq!(session.ingest("broken.json", b"{oops"), 0);
        assert_eq!(session.corpus.len(), before + 1);
    }

    #[test]
    fn sessions_are_isolated() {
        let mut first = Session::default();
        let second = Session::default();
        first.ingest("extra.txt", b"What is fever?,Hot.");
        assert_ne!(first.corpus.len(), second.corpus.len());
    }
}
