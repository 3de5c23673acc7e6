//! Per-turn routing: Q&A retrieval first, then keyword intents, then fallback.

pub mod render;
pub mod session;

use serde::Serialize;
use tracing::debug;

use crate::{
    advice::{
        drugs::{drugs_mentioned, find_drug},
        safety, Condition, ConditionPlan, DrugRecord, SafetyFlag, UserProfile,
    },
    config::RetrievalPolicy,
    data::Corpus,
    nlp::{intent, norm_intent},
    retrieval::{self, Candidate, Retrieval},
};

pub use session::{Role, Session, Turn};

/// Structured reply handed to whatever renders the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    QnaSingle {
        answer: String,
        score: f64,
        source_question: String,
        source_id: String,
    },
    QnaAmbiguous {
        candidates: Vec<Candidate>,
    },
    Greeting,
    ConditionAdvice {
        condition: Condition,
        plan: ConditionPlan,
        /// Deduplicated and sorted across every medicine the plan names.
        flags: Vec<SafetyFlag>,
    },
    DrugAdvice {
        drug: &'static DrugRecord,
        flags: Vec<SafetyFlag>,
    },
    Fallback,
}

impl Response {
    /// Short label of the strategy that produced the reply.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QnaSingle { .. } => "qna_single",
            Self::QnaAmbiguous { .. } => "qna_ambiguous",
            Self::Greeting => "greeting",
            Self::ConditionAdvice { .. } => "condition_advice",
            Self::DrugAdvice { .. } => "drug_advice",
            Self::Fallback => "fallback",
        }
    }
}

/// Answer one utterance. Reads the profile and corpus, mutates nothing.
pub fn handle_utterance(
    text: &str,
    profile: &UserProfile,
    corpus: &Corpus,
    policy: &RetrievalPolicy,
) -> Response {
    let response = route(text, profile, corpus, policy);
    debug!(kind = response.kind(), "routed utterance");
    response
}

fn route(
    text: &str,
    profile: &UserProfile,
    corpus: &Corpus,
    policy: &RetrievalPolicy,
) -> Response {
    match retrieval::rank(text, corpus.active(), policy) {
        Retrieval::Confident(best) => {
            return Response::QnaSingle {
                answer: best.answer,
                score: best.score,
                source_question: best.question,
                source_id: best.source,
            }
        }
        Retrieval::Ambiguous(candidates) => return Response::QnaAmbiguous { candidates },
        Retrieval::NoMatch => {}
    }

    let normalised = norm_intent(text);
    if intent::is_greeting(&normalised) {
        return Response::Greeting;
    }

    if let Some(condition) = intent::classify_condition(&normalised) {
        let plan = ConditionPlan::for_condition(condition);
        let implicated = drugs_mentioned(&plan.regimen_text());
        let flags = safety::check_all(profile, implicated);
        return Response::ConditionAdvice {
            condition,
            plan,
            flags,
        };
    }

    if let Some(drug) = find_drug(&normalised) {
        let flags = safety::check(profile, drug);
        return Response::DrugAdvice { drug, flags };
    }

    Response::Fallback
}
