//! Shared application state.

use ragcompare_chat::CompletionsClient;
use ragcompare_core::Config;

/// State shared by all route handlers. Configuration is read-only for the
/// lifetime of the process, so no locking is needed.
pub struct AppState {
    pub config: Config,
    pub completions: CompletionsClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completions = CompletionsClient::new(config.openai.clone());
        Self {
            config,
            completions,
        }
    }
}
