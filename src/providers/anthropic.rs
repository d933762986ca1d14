use crate::config::PlannerConfig;
use crate::error::CompletionError;
use crate::providers::{build_client, CompletionProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

pub struct AnthropicProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider from configuration
    pub fn new(config: &PlannerConfig) -> Self {
        AnthropicProvider {
            client: build_client(config.timeout),
            api_key: config.api_key.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.anthropic.com".to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        AnthropicProvider {
            client: Client::new(),
            api_key: Some(api_key),
            base_url,
            model,
            temperature: 0.9,
            max_tokens: 1000,
        }
    }

    fn api_key(&self) -> Result<String, CompletionError> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or_else(|| {
                CompletionError::Configuration(
                    "ANTHROPIC_API_KEY not found in config or environment".to_string(),
                )
            })
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
                "messages": [
                    {"role": "user", "content": prompt}
                ]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let completion = response_body["content"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                CompletionError::MalformedResponse(
                    "no completion text in Anthropic response".to_string(),
                )
            })?
            .to_string();

        Ok(completion)
    }
}
