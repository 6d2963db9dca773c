use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

pub const DEFAULT_USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Clone, Debug)]
pub struct NutrimentorConfig {
    pub nutrition_database: NutritionDatabaseConfig,
    pub llm: LLMConfig,
    pub guideline: GuidelineConfig,
}

#[derive(Clone, Debug)]
pub struct NutritionDatabaseConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct GuidelineConfig {
    /// Reference document; retrieval is disabled when unset.
    pub document_path: Option<PathBuf>,
    pub chunk_size: usize,
    pub top_k: usize,
}

impl Default for GuidelineConfig {
    fn default() -> Self {
        Self {
            document_path: None,
            chunk_size: 1000,
            top_k: 3,
        }
    }
}

impl NutrimentorConfig {
    /// Both credentials must be present before the service accepts requests.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.nutrition_database.api_key.trim().is_empty() {
            return Err(CoreError::Configuration(
                "USDA API key is missing".to_string(),
            ));
        }

        if self.llm.gemini_api_key.trim().is_empty() {
            return Err(CoreError::Configuration(
                "Gemini API key is missing".to_string(),
            ));
        }

        if self.llm.gemini_model.trim().is_empty() {
            return Err(CoreError::Configuration(
                "Gemini model name is missing".to_string(),
            ));
        }

        if self.guideline.chunk_size == 0 {
            return Err(CoreError::Configuration(
                "guideline chunk size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
