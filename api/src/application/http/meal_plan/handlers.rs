pub mod generate_meal_plan;
pub mod preview_prompt;
