//! Azure OpenAI chat completions, plain and retrieval-grounded.
//!
//! Retrieval is delegated entirely to Azure AI Search via the `data_sources`
//! block of the completions request — no local retrieval logic exists here.

pub mod client;
pub mod types;

pub use client::{Completion, CompletionsClient, SYSTEM_PROMPT};
pub use types::*;
