//! Q&A corpus storage and ingestion layer.

pub mod builtin;
pub mod corpus;
pub mod ingest;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{config::Settings, nlp::norm_compare};

pub use corpus::Corpus;

/// A single question/answer pair and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnaEntry {
    pub question: String,
    pub answer: String,
    /// `builtin` or the uploaded file name.
    pub source: String,
}

impl QnaEntry {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            source: source.into(),
        }
    }

    /// Deduplication key: the comparison-normalised question.
    pub fn key(&self) -> String {
        norm_compare(&self.question)
    }
}

/// Built-in corpus merged with the configured Q&A directory and `files`.
pub fn seeded_corpus(settings: &Settings, files: &[PathBuf]) -> Corpus {
    let mut corpus = Corpus::with_builtin();
    let mut extra = Vec::new();
    if let Some(dir) = &settings.qna_dir {
        extra.extend(ingest::load_qna_dir(dir));
    }
    for path in files {
        extra.extend(ingest::load_qna_file(path));
    }
    if !extra.is_empty() {
        corpus.merge(extra);
    }
    info!(entries = corpus.len(), "corpus ready");
    corpus
}
