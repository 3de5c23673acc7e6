//! Fuzzy Q&A retrieval: scoring, ranking and the confidence tie-break.

pub mod similarity;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::RetrievalPolicy, data::QnaEntry};

/// Tolerance for comparing rounded score gaps against the margin.
const MARGIN_EPSILON: f64 = 1e-9;

/// A ranked corpus entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub question: String,
    pub answer: String,
    /// Similarity rounded to three decimals.
    pub score: f64,
    pub source: String,
}

/// Outcome of ranking a query against a corpus.
#[derive(Debug, Clone, PartialEq)]
pub enum Retrieval {
    NoMatch,
    Confident(Candidate),
    /// Close candidates in descending score order.
    Ambiguous(Vec<Candidate>),
}

/// Rank `entries` against `query` and apply the threshold and margin policy.
pub fn rank(query: &str, entries: &[QnaEntry], policy: &RetrievalPolicy) -> Retrieval {
    if entries.is_empty() {
        return Retrieval::NoMatch;
    }

    let mut scored: Vec<(f64, &QnaEntry)> = entries
        .iter()
        .map(|entry| (similarity::score(query, &entry.question), entry))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut top: Vec<Candidate> = scored
        .into_iter()
        .take(policy.top_k)
        .filter(|(score, _)| *score >= policy.min_score)
        .map(|(score, entry)| Candidate {
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            score: round3(score),
            source: entry.source.clone(),
        })
        .collect();

    let confident = match top.as_slice() {
        [] => return Retrieval::NoMatch,
        [_] => true,
        [best, runner_up, ..] => best.score - runner_up.score + MARGIN_EPSILON >= policy.confidence_margin,
    };
    debug!(candidates = top.len(), confident, best = top[0].score, "ranked q&a");

    if confident {
        Retrieval::Confident(top.swap_remove(0))
    } else {
        Retrieval::Ambiguous(top)
    }
}

fn round3(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
