mod anthropic;
mod factory;
mod open_ai;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::CompletionError;

// Shared by all providers: honor the configured timeout when set,
// otherwise keep the reqwest default.
pub(crate) fn build_client(timeout: Option<u64>) -> Client {
    match timeout {
        Some(secs) => Client::builder()
            .timeout(Duration::from_secs(secs))
            .build()
            .unwrap_or_else(|_| Client::new()),
        None => Client::new(),
    }
}

/// Unified trait for text-completion providers
///
/// The pipeline treats the provider as an opaque text-in/text-out
/// collaborator: submit prompt text, receive completion text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Submit a prompt and return the generated completion text
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
