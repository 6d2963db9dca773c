use axum::extract::State;
use nutrimentor_core::domain::meal_plan::{entities::MealPlan, ports::MealPlanService};
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
pub struct GenerateMealPlanResponse {
    pub data: MealPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal-plan",
    summary = "Generate a meal plan",
    description = "Looks up nutrition data for the listed foods, composes the dietary-guideline prompt and asks the generation model for a 7-day plan. Generation failures are reported in the result, not as an HTTP error.",
    responses(
        (status = 200, body = GenerateMealPlanResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = GenerateMealPlanValidator
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanValidator>,
) -> Result<Response<GenerateMealPlanResponse>, ApiError> {
    let meal_plan = state
        .service
        .generate_meal_plan(payload.into_input())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateMealPlanResponse { data: meal_plan }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use crate::application::http::test::{gemini_answer, meal_plan_request, test_app};

    #[tokio::test]
    async fn test_generate_meal_plan_end_to_end() {
        let app = test_app().await;

        Mock::given(method("GET"))
            .and(path("/foods/search"))
            .and(query_param("query", "chicken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "foods": [{
                    "description": "Chicken, roasted",
                    "servingSize": 100,
                    "servingSizeUnit": "g",
                    "foodNutrients": [
                        { "nutrientName": "Protein", "unitName": "G", "value": 31.0 }
                    ]
                }]
            })))
            .expect(1)
            .mount(&app.usda)
            .await;
        Mock::given(method("GET"))
            .and(path("/foods/search"))
            .and(query_param("query", "unicorn-meat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foods": [] })))
            .expect(1)
            .mount(&app.usda)
            .await;
        gemini_answer(&app.gemini, json!({
            "candidates": [{ "content": { "parts": [{ "text": "Day 1: grilled chicken" }] } }]
        }))
        .await;

        let response = app
            .server
            .post("/meal-plans")
            .json(&meal_plan_request(json!(["chicken", "unicorn-meat"])))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let data = &body["data"];
        assert_eq!(data["result"]["status"], "generated");
        assert_eq!(data["result"]["text"], "Day 1: grilled chicken");
        assert_eq!(data["nutrition"][0], "**Chicken, roasted** (100 g):\nProtein: 31.0 G");
        assert_eq!(data["nutrition"][1], "**Unicorn-meat**: Nutritional information not found.");
        assert!(data["prompt"].as_str().unwrap().contains("Age: 30"));
    }

    #[tokio::test]
    async fn test_generate_meal_plan_reports_model_failure_in_body() {
        let app = test_app().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foods": [] })))
            .mount(&app.usda)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&app.gemini)
            .await;

        let response = app
            .server
            .post("/meal-plans")
            .json(&meal_plan_request(json!("rice")))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["result"]["status"], "failed");
        assert!(
            body["data"]["result"]["text"]
                .as_str()
                .unwrap()
                .starts_with("An error occurred while communicating with the generation service")
        );
    }

    #[tokio::test]
    async fn test_generate_meal_plan_failure_text_hides_api_key() {
        let app = test_app().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foods": [] })))
            .mount(&app.usda)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&app.gemini)
            .await;

        let response = app
            .server
            .post("/meal-plans")
            .json(&meal_plan_request(json!(["rice"])))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["result"]["status"], "failed");
        assert!(!response.text().contains("gemini-key"));
    }

    #[tokio::test]
    async fn test_generate_meal_plan_without_candidates_returns_sentinel() {
        let app = test_app().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foods": [] })))
            .mount(&app.usda)
            .await;
        gemini_answer(&app.gemini, json!({ "candidates": [] })).await;

        let response = app
            .server
            .post("/meal-plans")
            .json(&meal_plan_request(json!(["rice"])))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["result"]["status"], "no_response");
    }

    #[tokio::test]
    async fn test_generate_meal_plan_rejects_invalid_age() {
        let app = test_app().await;

        let mut request = meal_plan_request(json!(["rice"]));
        request["age"] = json!(130);

        let response = app.server.post("/meal-plans").json(&request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
        assert!(app.usda.received_requests().await.unwrap().is_empty());
        assert!(app.gemini.received_requests().await.unwrap().is_empty());
    }
}
