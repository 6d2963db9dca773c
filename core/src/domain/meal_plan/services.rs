use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    guideline::{entities::GuidelineExcerpt, ports::GuidelineRetriever},
    meal_plan::{
        entities::{ComposedPrompt, MealPlan, MealPlanPrompt, MealPlanResult},
        ports::{LLMClient, MealPlanService},
        prompt::compose,
        value_objects::GenerateMealPlanInput,
    },
    nutrition::{ports::NutritionRepository, services::aggregate_nutrition},
    profile::entities::UserProfile,
};

/// Sends the prompt once and folds every outcome into a typed result.
pub async fn generate_plan<L>(client: &L, prompt: &MealPlanPrompt) -> MealPlanResult
where
    L: LLMClient,
{
    match client.generate_with_text(prompt.as_str().to_string()).await {
        Ok(text) => {
            if text.is_none() {
                tracing::warn!("generation returned no candidates");
            }
            MealPlanResult::from(text)
        }
        Err(e) => {
            tracing::error!(error = %e, "meal plan generation failed");
            MealPlanResult::failed(e)
        }
    }
}

fn guideline_query(profile: &UserProfile) -> String {
    [
        profile.health_goals.as_str(),
        profile.dietary_preferences.as_str(),
        profile.health_conditions.as_str(),
    ]
    .join(" ")
}

impl<N, LLM, G> Service<N, LLM, G>
where
    N: NutritionRepository,
    LLM: LLMClient,
    G: GuidelineRetriever,
{
    async fn compose_prompt(
        &self,
        input: GenerateMealPlanInput,
    ) -> Result<ComposedPrompt, CoreError> {
        input.profile.validate()?;

        let dossier = aggregate_nutrition(&self.nutrition_repository, &input.foods).await;
        let prompt = compose(&input.profile, &dossier);

        Ok(ComposedPrompt {
            prompt,
            nutrition: dossier.blocks(),
        })
    }

    async fn guideline_excerpts(&self, profile: &UserProfile) -> Vec<GuidelineExcerpt> {
        if self.guideline_top_k == 0 {
            return Vec::new();
        }

        self.guideline_retriever
            .retrieve(guideline_query(profile), self.guideline_top_k)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "guideline retrieval failed");
                Vec::new()
            })
    }
}

impl<N, LLM, G> MealPlanService for Service<N, LLM, G>
where
    N: NutritionRepository,
    LLM: LLMClient,
    G: GuidelineRetriever,
{
    #[instrument(skip(self, input), fields(foods = input.foods.len()))]
    async fn compose_meal_plan_prompt(
        &self,
        input: GenerateMealPlanInput,
    ) -> Result<ComposedPrompt, CoreError> {
        self.compose_prompt(input).await
    }

    #[instrument(skip(self, input), fields(foods = input.foods.len()))]
    async fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> Result<MealPlan, CoreError> {
        let profile = input.profile.clone();
        let composed = self.compose_prompt(input).await?;

        let result = generate_plan(&self.llm_client, &composed.prompt).await;
        let excerpts = self.guideline_excerpts(&profile).await;

        tracing::info!(
            generated = result.is_generated(),
            excerpts = excerpts.len(),
            "meal plan ready"
        );

        Ok(MealPlan::new(composed, result, excerpts))
    }
}
