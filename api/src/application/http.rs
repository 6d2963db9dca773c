pub mod health;
pub mod meal_plan;
pub mod nutrition;
pub mod server;
