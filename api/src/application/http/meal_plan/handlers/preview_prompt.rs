use axum::extract::State;
use nutrimentor_core::domain::meal_plan::{entities::ComposedPrompt, ports::MealPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal_plan::validators::GenerateMealPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreviewPromptResponse {
    pub data: ComposedPrompt,
}

#[utoipa::path(
    post,
    path = "/prompt",
    tag = "meal-plan",
    summary = "Preview the meal plan prompt",
    description = "Returns the exact prompt that would be sent to the generation model, without calling it.",
    responses(
        (status = 200, body = PreviewPromptResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = GenerateMealPlanValidator
)]
pub async fn preview_prompt(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanValidator>,
) -> Result<Response<PreviewPromptResponse>, ApiError> {
    let composed = state
        .service
        .compose_meal_plan_prompt(payload.into_input())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PreviewPromptResponse { data: composed }))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use wiremock::{Mock, ResponseTemplate, matchers::method};

    use crate::application::http::test::{meal_plan_request, test_app};

    #[tokio::test]
    async fn test_preview_prompt_does_not_call_model() {
        let app = test_app().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&app.usda)
            .await;

        let response = app
            .server
            .post("/meal-plans/prompt")
            .json(&meal_plan_request(json!("eggs, fish")))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let prompt = body["data"]["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("User Information:\nAge: 30\n"));
        assert!(prompt.contains("Regular Foods: eggs, fish"));
        assert!(prompt.contains(
            "**Eggs**: Nutritional information not found.\n\n**Fish**: Nutritional information not found."
        ));
        assert!(prompt.contains("Protein: 10-35% of total calories"));
        assert!(app.gemini.received_requests().await.unwrap().is_empty());
    }
}
