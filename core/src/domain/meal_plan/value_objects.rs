use crate::domain::{nutrition::value_objects::FoodQuery, profile::entities::UserProfile};

#[derive(Debug, Clone)]
pub struct GenerateMealPlanInput {
    pub profile: UserProfile,
    /// Request order, duplicates kept.
    pub foods: Vec<FoodQuery>,
}
