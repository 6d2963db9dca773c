use nutrimentor_core::domain::{
    meal_plan::value_objects::GenerateMealPlanInput,
    nutrition::value_objects::{FoodQuery, parse_food_list},
    profile::entities::{ActivityLevel, AlcoholChoice, Gender, UserProfile},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const MAX_FOODS: usize = 50;
pub const MAX_FOOD_NAME_LEN: usize = 100;
pub const MAX_FREE_TEXT_LEN: u64 = 500;

/// Either a JSON array of names or one comma-separated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FoodList {
    Items(Vec<String>),
    Csv(String),
}

impl Default for FoodList {
    fn default() -> Self {
        FoodList::Items(Vec::new())
    }
}

impl FoodList {
    /// Blank entries are dropped; order and duplicates are kept.
    pub fn queries(&self) -> Vec<FoodQuery> {
        match self {
            FoodList::Items(items) => items
                .iter()
                .filter_map(|item| FoodQuery::parse(item).ok())
                .collect(),
            FoodList::Csv(raw) => parse_food_list(raw),
        }
    }
}

fn validate_food_list(foods: &FoodList) -> Result<(), ValidationError> {
    let names: Vec<&str> = match foods {
        FoodList::Items(items) => items.iter().map(String::as_str).collect(),
        FoodList::Csv(raw) => raw.split(',').collect(),
    };

    if names.len() > MAX_FOODS {
        return Err(ValidationError::new("too_many_foods")
            .with_message(format!("at most {MAX_FOODS} foods are allowed").into()));
    }

    if names.iter().any(|n| n.trim().chars().count() > MAX_FOOD_NAME_LEN) {
        return Err(ValidationError::new("food_name_too_long").with_message(
            format!("food names must be at most {MAX_FOOD_NAME_LEN} characters").into(),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateMealPlanValidator {
    #[validate(range(max = 120, message = "age must be between 0 and 120"))]
    #[schema(example = 30)]
    pub age: u32,

    pub gender: Gender,

    #[validate(range(min = 0.0, max = 300.0, message = "height_cm must be between 0 and 300"))]
    #[schema(example = 173.0)]
    pub height_cm: f64,

    #[validate(range(min = 0.0, max = 700.0, message = "weight_kg must be between 0 and 700"))]
    #[schema(example = 127.0)]
    pub weight_kg: f64,

    pub activity_level: ActivityLevel,

    #[schema(example = 3500)]
    pub weekly_calories_burned: u32,

    #[schema(example = 4000)]
    pub weekly_steps: u32,

    #[validate(range(
        min = 0.0,
        max = 24.0,
        message = "daily_sleep_hours must be between 0 and 24"
    ))]
    #[schema(example = 7.0)]
    pub daily_sleep_hours: f64,

    #[serde(default)]
    #[validate(length(
        max = MAX_FREE_TEXT_LEN,
        message = "health_goals must be at most 500 characters"
    ))]
    #[schema(example = "Lose 15 kg in 3 months")]
    pub health_goals: String,

    #[serde(default)]
    #[validate(length(
        max = MAX_FREE_TEXT_LEN,
        message = "dietary_preferences must be at most 500 characters"
    ))]
    #[schema(example = "Non-vegetarian")]
    pub dietary_preferences: String,

    #[serde(default)]
    #[validate(length(
        max = MAX_FREE_TEXT_LEN,
        message = "health_conditions must be at most 500 characters"
    ))]
    #[schema(example = "None")]
    pub health_conditions: String,

    #[serde(default)]
    pub drinks_alcohol: bool,

    #[serde(default)]
    pub include_alcohol_in_plan: AlcoholChoice,

    #[serde(default)]
    #[validate(custom(function = "validate_food_list"))]
    pub foods: FoodList,
}

impl GenerateMealPlanValidator {
    pub fn into_input(self) -> GenerateMealPlanInput {
        let foods = self.foods.queries();

        GenerateMealPlanInput {
            profile: UserProfile {
                age: self.age,
                gender: self.gender,
                height_cm: self.height_cm,
                weight_kg: self.weight_kg,
                activity_level: self.activity_level,
                weekly_calories_burned: self.weekly_calories_burned,
                weekly_steps: self.weekly_steps,
                daily_sleep_hours: self.daily_sleep_hours,
                health_goals: self.health_goals,
                dietary_preferences: self.dietary_preferences,
                health_conditions: self.health_conditions,
                drinks_alcohol: self.drinks_alcohol,
                include_alcohol_in_plan: self.include_alcohol_in_plan,
            },
            foods,
        }
    }
}
