//! Azure OpenAI chat-completions client.
//!
//! Two request shapes against the same deployment: a plain completion, and a
//! grounded completion that attaches an Azure AI Search data source so the
//! provider performs retrieval and grounding server-side.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use ragcompare_core::{Error, OpenAiSettings, Result, SearchSettings};

use crate::types::ChatMessage;

/// System prompt used by both panels.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant for an AI learner, providing concised and clear answers.";

/// Maximum upstream error body length carried into our error value.
const ERROR_BODY_LIMIT: usize = 500;

/// A completed answer: the text plus the deployment that produced it.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model: String,
}

/// Handle to an Azure OpenAI chat-completions deployment.
#[derive(Clone)]
pub struct CompletionsClient {
    http: Client,
    settings: OpenAiSettings,
}

impl CompletionsClient {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    /// Chat-completions URL for the configured deployment.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.deployment,
            self.settings.api_version
        )
    }

    /// Plain completion: the two-message exchange, no retrieval.
    pub async fn complete(&self, query: &str) -> Result<Completion> {
        let body = plain_body(&build_messages(SYSTEM_PROMPT, query));
        self.post(body).await
    }

    /// Grounded completion: the same exchange plus an Azure Search data
    /// source naming the configured endpoint, index, and api-key credential.
    pub async fn complete_grounded(
        &self,
        query: &str,
        search: &SearchSettings,
    ) -> Result<Completion> {
        let body = grounded_body(&build_messages(SYSTEM_PROMPT, query), search);
        self.post(body).await
    }

    async fn post(&self, body: Value) -> Result<Completion> {
        let url = self.completions_url();
        debug!(
            "Requesting completion from deployment {}",
            self.settings.deployment
        );

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.settings.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        let parsed: Value = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("invalid response body: {}", e)))?;

        extract_answer(&parsed).map(|text| Completion {
            text,
            model: self.settings.deployment.clone(),
        })
    }
}

/// The fixed two-message exchange: system then user.
pub fn build_messages(system_prompt: &str, query: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt),
        ChatMessage::user(query),
    ]
}

/// Request body without retrieval.
pub fn plain_body(messages: &[ChatMessage]) -> Value {
    json!({ "messages": messages })
}

/// Request body with the Azure Search data source attached.
pub fn grounded_body(messages: &[ChatMessage], search: &SearchSettings) -> Value {
    json!({
        "messages": messages,
        "data_sources": [{
            "type": "azure_search",
            "parameters": {
                "endpoint": search.endpoint,
                "index_name": search.index_name,
                "authentication": {
                    "type": "api_key",
                    "key": search.admin_key,
                },
            },
        }],
    })
}

/// First choice's message content.
fn extract_answer(parsed: &Value) -> Result<String> {
    parsed["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| Error::Completion("response contained no message content".into()))
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> OpenAiSettings {
        OpenAiSettings {
            endpoint: "https://example.openai.azure.com/".into(),
            api_key: "oai-key".into(),
            deployment: "gpt-4o-mini".into(),
            api_version: "2024-12-01-preview".into(),
        }
    }

    fn test_search() -> SearchSettings {
        SearchSettings {
            endpoint: "https://example.search.windows.net".into(),
            admin_key: "search-key".into(),
            index_name: "docs-index".into(),
        }
    }

    #[test]
    fn completions_url_includes_deployment_and_api_version() {
        let client = CompletionsClient::new(test_settings());
        assert_eq!(
            client.completions_url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o-mini\
             /chat/completions?api-version=2024-12-01-preview"
        );
    }

    #[test]
    fn exchange_is_exactly_system_then_user() {
        let messages = build_messages(SYSTEM_PROMPT, "what is RAG?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "what is RAG?");
    }

    #[test]
    fn plain_body_has_two_messages_and_no_data_sources() {
        let body = plain_body(&build_messages(SYSTEM_PROMPT, "what is RAG?"));
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(body.get("data_sources").is_none());
    }

    #[test]
    fn grounded_body_adds_the_search_data_source() {
        let messages = build_messages(SYSTEM_PROMPT, "what is RAG?");
        let body = grounded_body(&messages, &test_search());

        // Same exchange as the plain body
        assert_eq!(body["messages"], plain_body(&messages)["messages"]);

        let sources = body["data_sources"].as_array().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0]["type"], "azure_search");

        let params = &sources[0]["parameters"];
        assert_eq!(params["endpoint"], "https://example.search.windows.net");
        assert_eq!(params["index_name"], "docs-index");
        assert_eq!(params["authentication"]["type"], "api_key");
        assert_eq!(params["authentication"]["key"], "search-key");
    }

    #[test]
    fn extract_answer_reads_first_choice_content() {
        let parsed = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Grounded answer." } }
            ]
        });
        assert_eq!(extract_answer(&parsed).unwrap(), "Grounded answer.");
    }

    #[test]
    fn extract_answer_fails_on_empty_choices() {
        let parsed = json!({ "choices": [] });
        assert!(extract_answer(&parsed).is_err());
    }

    #[test]
    fn truncate_keeps_short_bodies_intact() {
        assert_eq!(truncate("quota exceeded", 500), "quota exceeded");
        let long = "x".repeat(600);
        let cut = truncate(&long, 500);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.len(), 503);
    }
}
