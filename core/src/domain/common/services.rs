use crate::domain::{
    guideline::ports::GuidelineRetriever, meal_plan::ports::LLMClient,
    nutrition::ports::NutritionRepository,
};

/// Holds the adapters every domain service is implemented against.
#[derive(Clone)]
pub struct Service<N, LLM, G>
where
    N: NutritionRepository,
    LLM: LLMClient,
    G: GuidelineRetriever,
{
    pub(crate) nutrition_repository: N,
    pub(crate) llm_client: LLM,
    pub(crate) guideline_retriever: G,
    pub(crate) guideline_top_k: usize,
}

impl<N, LLM, G> Service<N, LLM, G>
where
    N: NutritionRepository,
    LLM: LLMClient,
    G: GuidelineRetriever,
{
    pub fn new(
        nutrition_repository: N,
        llm_client: LLM,
        guideline_retriever: G,
        guideline_top_k: usize,
    ) -> Self {
        Self {
            nutrition_repository,
            llm_client,
            guideline_retriever,
            guideline_top_k,
        }
    }
}
