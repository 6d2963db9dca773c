use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    guideline::entities::GuidelineExcerpt,
};

/// Text returned in place of a plan when the model produced no candidate.
pub const NO_RESPONSE: &str = "No response";

/// Prefix of the user-visible message for a failed generation call.
pub const GENERATION_FAILED_PREFIX: &str =
    "An error occurred while communicating with the generation service";

/// The full text sent to the generation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct MealPlanPrompt(String);

impl MealPlanPrompt {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MealPlanPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum MealPlanResult {
    Generated(String),
    NoResponse,
    Failed(String),
}

impl MealPlanResult {
    pub fn failed(reason: impl fmt::Display) -> Self {
        MealPlanResult::Failed(format!("{GENERATION_FAILED_PREFIX}: {reason}"))
    }

    /// What the user sees: the plan, the sentinel or the error message.
    pub fn text(&self) -> &str {
        match self {
            MealPlanResult::Generated(text) | MealPlanResult::Failed(text) => text,
            MealPlanResult::NoResponse => NO_RESPONSE,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, MealPlanResult::Generated(_))
    }
}

impl From<Option<String>> for MealPlanResult {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => MealPlanResult::Generated(text),
            None => MealPlanResult::NoResponse,
        }
    }
}

/// Prompt plus the nutrition blocks it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ComposedPrompt {
    pub prompt: MealPlanPrompt,
    pub nutrition: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub nutrition: Vec<String>,
    pub prompt: MealPlanPrompt,
    pub result: MealPlanResult,
    pub guideline_excerpts: Vec<GuidelineExcerpt>,
}

impl MealPlan {
    pub fn new(
        composed: ComposedPrompt,
        result: MealPlanResult,
        guideline_excerpts: Vec<GuidelineExcerpt>,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            created_at: now,
            nutrition: composed.nutrition,
            prompt: composed.prompt,
            result,
            guideline_excerpts,
        }
    }
}
