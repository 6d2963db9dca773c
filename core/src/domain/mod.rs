pub mod common;
pub mod guideline;
pub mod meal_plan;
pub mod nutrition;
pub mod profile;
