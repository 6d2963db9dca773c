use crate::{
    domain::common::{NutrimentorConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        guideline::LazyGuidelineIndex, llm::GeminiLLMClient, nutrition::UsdaNutritionClient,
    },
};

pub type NutrimentorService = Service<UsdaNutritionClient, GeminiLLMClient, LazyGuidelineIndex>;

/// Wires the production adapters. Fails before any request on bad config.
pub async fn create_service(config: NutrimentorConfig) -> Result<NutrimentorService, CoreError> {
    config.validate()?;

    let nutrition_repository = UsdaNutritionClient::new(
        config.nutrition_database.api_key,
        config.nutrition_database.base_url,
    );
    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );

    if let Some(path) = &config.guideline.document_path {
        tracing::info!("guideline retrieval enabled with {}", path.display());
    }
    let guideline_retriever = LazyGuidelineIndex::new(
        config.guideline.document_path,
        config.guideline.chunk_size,
    );

    Ok(Service::new(
        nutrition_repository,
        llm_client,
        guideline_retriever,
        config.guideline.top_k,
    ))
}
