use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::lookup_food::{__path_lookup_food, lookup_food};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(lookup_food))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/nutrition/foods/{{food_name}}",
            state.args.server.root_path
        ),
        get(lookup_food),
    )
}
