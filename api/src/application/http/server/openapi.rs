use utoipa::OpenApi;

use crate::application::http::{
    health::HealthApiDoc, meal_plan::router::MealPlanApiDoc, nutrition::router::NutritionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriMentor API"
    ),
    nest(
        (path = "/meal-plans", api = MealPlanApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
