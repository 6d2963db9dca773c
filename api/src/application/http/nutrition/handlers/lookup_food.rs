use axum::extract::{Path, State};
use nutrimentor_core::domain::nutrition::{
    entities::NutritionRecord, ports::NutritionService, value_objects::LookupFoodInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LookupFoodResponse {
    pub data: NutritionRecord,
    pub rendered: String,
}

#[utoipa::path(
    get,
    path = "/foods/{food_name}",
    tag = "nutrition",
    summary = "Look up one food",
    description = "Returns the nutrition facts of the first database match for the food name.",
    responses(
        (status = 200, body = LookupFoodResponse),
        (status = 404, description = "No match in the nutrition database", body = ApiErrorResponse),
        (status = 502, description = "Nutrition database unavailable", body = ApiErrorResponse)
    ),
    params(
        ("food_name" = String, Path, description = "Food name, e.g. chicken breast"),
    )
)]
pub async fn lookup_food(
    Path(food_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<LookupFoodResponse>, ApiError> {
    let record = state
        .service
        .lookup_food(LookupFoodInput { food_name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LookupFoodResponse {
        rendered: record.render(),
        data: record,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    use crate::application::http::test::test_app;

    #[tokio::test]
    async fn test_lookup_food_returns_record() {
        let app = test_app().await;
        Mock::given(method("GET"))
            .and(path("/foods/search"))
            .and(query_param("query", "egg"))
            .and(header("X-Api-Key", "usda-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "foods": [{
                    "description": "Egg, whole, raw",
                    "foodNutrients": [
                        { "nutrientName": "Protein", "unitName": "G", "value": 12.6 }
                    ]
                }]
            })))
            .mount(&app.usda)
            .await;

        let response = app.server.get("/nutrition/foods/Egg").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["food_name"], "Egg, whole, raw");
        assert_eq!(body["rendered"], "**Egg, whole, raw** (100 g):\nProtein: 12.6 G");
    }

    #[tokio::test]
    async fn test_lookup_unknown_food_is_not_found() {
        let app = test_app().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foods": [] })))
            .mount(&app.usda)
            .await;

        let response = app.server.get("/nutrition/foods/unicorn-meat").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lookup_upstream_failure_is_bad_gateway() {
        let app = test_app().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&app.usda)
            .await;

        let response = app.server.get("/nutrition/foods/rice").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_lookup_undecodable_body_hides_api_key() {
        let app = test_app().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&app.usda)
            .await;

        let response = app.server.get("/nutrition/foods/rice").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        assert!(!response.text().contains("usda-key"));
    }
}
