use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan},
    preview_prompt::{__path_preview_prompt, preview_prompt},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_meal_plan, preview_prompt))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meal-plans", state.args.server.root_path),
            post(generate_meal_plan),
        )
        .route(
            &format!("{}/meal-plans/prompt", state.args.server.root_path),
            post(preview_prompt),
        )
}
