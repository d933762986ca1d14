use thiserror::Error;

use crate::pipeline::Stage;

/// Errors that can occur during a single completion-service call
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Missing or invalid credential, detected at first use
    #[error("Missing or invalid credential: {0}")]
    Configuration(String),

    /// Network failure reaching the completion service
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The completion service answered with an error status
    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// The service answered successfully but the completion text was missing
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors that can occur while running the meal pipeline
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The ingredient list was empty; no call was issued
    #[error("Ingredient list must not be empty")]
    EmptyIngredients,

    /// A stage's completion call failed; later stages were not run
    #[error("Stage '{stage}' failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: CompletionError,
    },

    /// The configured provider name is not known
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl PlannerError {
    /// The stage whose completion call failed, if any.
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            PlannerError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
