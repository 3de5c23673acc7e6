//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::dialogue::Response;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub text: String,
}

/// Structured reply plus its rendered text.
#[derive(Debug, Clone, Serialize)]
pub struct AskReply {
    pub response: Response,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    /// Original file name; its extension selects the parser.
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReply {
    pub accepted: usize,
    pub corpus_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConditionOption {
    pub code: &'static str,
    pub label: &'static str,
}
