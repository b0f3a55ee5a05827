//! Chat types shared between the client and the HTTP API surface.

use serde::{Deserialize, Serialize};

/// Chat message sent to the completions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Incoming answer request from the comparison page.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub query: String,
}
