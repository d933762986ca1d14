mod template;

pub use template::PromptTemplate;

use std::fmt;

use log::debug;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::providers::{CompletionProvider, ProviderFactory};

/// The three pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Meal,
    ShoppingList,
    Instructions,
}

impl Stage {
    /// Name of the variable this stage's output binds to
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Meal => "meal",
            Stage::ShoppingList => "shopping_list",
            Stage::Instructions => "instructions",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stage record: the template to render and the variable names it
/// reads and writes. The runner interprets these in order; each
/// template's input variable is satisfied by the previous stage's
/// output (stage 1 reads the external ingredient list).
struct StageSpec {
    stage: Stage,
    template: PromptTemplate,
}

const MEAL_TEMPLATE: &str = include_str!("prompts/meal.txt");
const SHOPPING_LIST_TEMPLATE: &str = include_str!("prompts/shopping_list.txt");
const INSTRUCTIONS_TEMPLATE: &str = include_str!("prompts/instructions.txt");

fn stage_table() -> [StageSpec; 3] {
    [
        StageSpec {
            stage: Stage::Meal,
            template: PromptTemplate::new(MEAL_TEMPLATE, "ingredients"),
        },
        StageSpec {
            stage: Stage::ShoppingList,
            template: PromptTemplate::new(SHOPPING_LIST_TEMPLATE, "meal"),
        },
        StageSpec {
            stage: Stage::Instructions,
            template: PromptTemplate::new(INSTRUCTIONS_TEMPLATE, "list"),
        },
    ]
}

/// The product of one pipeline run. Discarded after display; no state
/// is carried across runs.
#[derive(Debug, Clone, Default)]
pub struct MealPlan {
    /// Name of the generated meal
    pub meal: String,
    /// Numbered shopping list for the meal
    pub shopping_list: String,
    /// Numbered cooking instructions
    pub instructions: String,
}

/// Runs three templated completion calls in fixed order, threading each
/// stage's output into the next stage's template.
pub struct MealPipeline {
    provider: Box<dyn CompletionProvider>,
    stages: [StageSpec; 3],
}

impl MealPipeline {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        MealPipeline {
            provider,
            stages: stage_table(),
        }
    }

    /// Create a pipeline with the provider named by the configuration
    pub fn from_config(config: &PlannerConfig) -> Result<Self, PlannerError> {
        Ok(MealPipeline::new(ProviderFactory::create(config)?))
    }

    /// Run the pipeline: ingredients → meal → shopping list → instructions.
    ///
    /// Stage outputs are returned unmodified. The first failing call
    /// aborts the run; no partial result is returned and no further
    /// call is issued. An empty or whitespace-only ingredient list is
    /// rejected before any call is made.
    pub async fn run(&self, ingredients: &str) -> Result<MealPlan, PlannerError> {
        if ingredients.trim().is_empty() {
            return Err(PlannerError::EmptyIngredients);
        }

        let mut carried = ingredients.to_string();
        let mut outputs = Vec::with_capacity(self.stages.len());
        for spec in &self.stages {
            let prompt = spec.template.render(&carried);
            debug!("{} prompt: {}", spec.stage, prompt);
            carried = self
                .provider
                .complete(&prompt)
                .await
                .map_err(|source| PlannerError::Stage {
                    stage: spec.stage,
                    source,
                })?;
            debug!("{} output: {}", spec.stage, carried);
            outputs.push(carried.clone());
        }

        let mut outputs = outputs.into_iter();
        Ok(MealPlan {
            meal: outputs.next().unwrap_or_default(),
            shopping_list: outputs.next().unwrap_or_default(),
            instructions: outputs.next().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompletionError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Deterministic provider stub: answers with a fixed response per
    /// call index and records every prompt it receives.
    #[derive(Clone)]
    struct StubProvider {
        responses: Vec<String>,
        fail_at: Option<usize>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl StubProvider {
        fn new(responses: &[&str]) -> Self {
            StubProvider {
                responses: responses.iter().map(|s| s.to_string()).collect(),
                fail_at: None,
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing_at(mut self, index: usize) -> Self {
            self.fail_at = Some(index);
            self
        }

        fn recorded_prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        fn provider_name(&self) -> &str {
            "stub"
        }

        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            let mut prompts = self.prompts.lock().unwrap();
            let index = prompts.len();
            prompts.push(prompt.to_string());
            if self.fail_at == Some(index) {
                return Err(CompletionError::Service {
                    status: 429,
                    message: "rate limited".to_string(),
                });
            }
            Ok(self.responses[index].clone())
        }
    }

    const STUB_MEAL: &str = "Chicken and rice";
    const STUB_LIST: &str = "Chicken and rice\n1. 2 chicken breasts\n2. 1 cup of rice";
    const STUB_STEPS: &str = "1. Boil water\n2. Cook chicken\n3. Serve chicken on rice";

    #[tokio::test]
    async fn test_run_returns_stage_outputs_unmodified() {
        let stub = StubProvider::new(&[STUB_MEAL, STUB_LIST, STUB_STEPS]);
        let pipeline = MealPipeline::new(Box::new(stub.clone()));

        let plan = pipeline.run("chicken, rice").await.unwrap();
        assert_eq!(plan.meal, STUB_MEAL);
        assert_eq!(plan.shopping_list, STUB_LIST);
        assert_eq!(plan.instructions, STUB_STEPS);
        assert_eq!(stub.recorded_prompts().len(), 3);
    }

    #[tokio::test]
    async fn test_each_prompt_contains_prior_output_verbatim() {
        let stub = StubProvider::new(&[STUB_MEAL, STUB_LIST, STUB_STEPS]);
        let pipeline = MealPipeline::new(Box::new(stub.clone()));

        pipeline.run("chicken, rice").await.unwrap();

        let prompts = stub.recorded_prompts();
        assert!(prompts[0].contains("chicken, rice"));
        assert!(prompts[1].contains(STUB_MEAL));
        assert!(prompts[2].contains(STUB_LIST));
    }

    #[tokio::test]
    async fn test_stage_one_failure_issues_no_further_calls() {
        let stub = StubProvider::new(&[STUB_MEAL, STUB_LIST, STUB_STEPS]).failing_at(0);
        let pipeline = MealPipeline::new(Box::new(stub.clone()));

        let result = pipeline.run("chicken, rice").await;
        assert!(matches!(
            result,
            Err(PlannerError::Stage {
                stage: Stage::Meal,
                ..
            })
        ));
        assert_eq!(stub.recorded_prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_stage_two_failure_is_identifiable_and_discards_meal() {
        let stub = StubProvider::new(&[STUB_MEAL, STUB_LIST, STUB_STEPS]).failing_at(1);
        let pipeline = MealPipeline::new(Box::new(stub.clone()));

        let err = pipeline.run("chicken, rice").await.unwrap_err();
        assert_eq!(err.failed_stage(), Some(Stage::ShoppingList));
        assert!(err.to_string().contains("shopping_list"));
        // Stage 1's meal value is discarded along with the run; only
        // two calls were ever issued.
        assert_eq!(stub.recorded_prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_ingredients_rejected_before_any_call() {
        let stub = StubProvider::new(&[STUB_MEAL, STUB_LIST, STUB_STEPS]);
        let pipeline = MealPipeline::new(Box::new(stub.clone()));

        let result = pipeline.run("").await;
        assert!(matches!(result, Err(PlannerError::EmptyIngredients)));

        let result = pipeline.run("   \n").await;
        assert!(matches!(result, Err(PlannerError::EmptyIngredients)));

        assert_eq!(stub.recorded_prompts().len(), 0);
    }

    #[tokio::test]
    async fn test_arbitrary_input_forwarded_verbatim_into_first_prompt() {
        let stub = StubProvider::new(&[STUB_MEAL, STUB_LIST, STUB_STEPS]);
        let pipeline = MealPipeline::new(Box::new(stub.clone()));

        pipeline.run("3 eggs; \"leftover\" rice {cold}").await.unwrap();
        assert!(stub.recorded_prompts()[0].contains("3 eggs; \"leftover\" rice {cold}"));
    }

    #[test]
    fn test_stage_table_templates_have_exactly_one_placeholder() {
        for spec in stage_table() {
            assert_eq!(
                spec.template.placeholder_count(),
                1,
                "stage {} template must have exactly one placeholder",
                spec.stage
            );
        }
    }

    #[test]
    fn test_stage_order_is_fixed() {
        let stages: Vec<Stage> = stage_table().iter().map(|s| s.stage).collect();
        assert_eq!(
            stages,
            vec![Stage::Meal, Stage::ShoppingList, Stage::Instructions]
        );
    }
}
