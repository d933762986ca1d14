use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::providers::{AnthropicProvider, CompletionProvider, OpenAIProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the provider instance named by the configuration
    pub fn create(config: &PlannerConfig) -> Result<Box<dyn CompletionProvider>, PlannerError> {
        match config.provider.as_str() {
            "openai" => Ok(Box::new(OpenAIProvider::new(config))),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config))),
            name => Err(PlannerError::UnknownProvider(format!(
                "{} (available: {})",
                name,
                Self::available_providers().join(", ")
            ))),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic"]
    }
}
