use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Process-wide planner configuration
///
/// Constructed once at start-up and passed explicitly into the pipeline
/// constructor. All three stages share the same provider, model,
/// temperature, and credentials.
#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Completion provider to use ("openai" or "anthropic")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier (e.g., "gpt-4o-mini", "claude-sonnet-4.5")
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate per stage
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via the provider's
    /// environment variable, e.g. OPENAI_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL for the completion endpoint (for custom or proxy endpoints)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds; unset uses the HTTP client default
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.9
}

fn default_max_tokens() -> u32 {
    1000
}

impl PlannerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALPLAN__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALPLAN__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("MEALPLAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

// Tests that mutate process environment variables hold this lock so
// they cannot race each other across the test binary's threads.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
