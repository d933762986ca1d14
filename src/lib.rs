pub mod config;
pub mod error;
pub mod pipeline;
pub mod providers;

pub use config::PlannerConfig;
pub use error::{CompletionError, PlannerError};
pub use pipeline::{MealPipeline, MealPlan, PromptTemplate, Stage};
pub use providers::{CompletionProvider, ProviderFactory};

/// Plan a meal from a comma-separated ingredient list.
///
/// Loads the process-wide configuration, builds the configured
/// completion provider, and runs the three-stage pipeline:
/// ingredients → meal name → shopping list → cooking instructions.
pub async fn plan_meal(ingredients: &str) -> Result<MealPlan, PlannerError> {
    let config = PlannerConfig::load()?;
    let pipeline = MealPipeline::from_config(&config)?;
    pipeline.run(ingredients).await
}
