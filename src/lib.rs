//! Offline question-answering assistant.
//!
//! Free text is first matched against a curated Q&A corpus by lexical
//! similarity; when nothing matches confidently it falls back to keyword
//! intents over a small medicine and symptom knowledge base, cross-checked
//! against the user's health profile.

pub mod advice;
pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod dialogue;
pub mod logging;
pub mod nlp;
pub mod retrieval;

pub use dialogue::{handle_utterance, Response, Session};
