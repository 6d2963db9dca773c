use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{ComposedPrompt, MealPlan},
        value_objects::GenerateMealPlanInput,
    },
};

/// Hosted text-generation model.
///
/// `Ok(None)` is a well-formed answer without any candidate.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    fn compose_meal_plan_prompt(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<ComposedPrompt, CoreError>> + Send;

    /// Fails only on invalid input; generation problems land in the result.
    fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}
