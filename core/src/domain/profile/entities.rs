use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[serde(alias = "Sedentary")]
    Sedentary,
    #[serde(alias = "Lightly active")]
    LightlyActive,
    #[serde(alias = "Moderately active")]
    ModeratelyActive,
    #[serde(alias = "Very active")]
    VeryActive,
    #[serde(alias = "Extra active")]
    ExtraActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::ExtraActive => "Extra active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Yes/No answer to "include alcohol in the meal plan?".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AlcoholChoice {
    Yes,
    #[default]
    No,
}

impl AlcoholChoice {
    pub fn as_str(&self) -> &str {
        match self {
            AlcoholChoice::Yes => "Yes",
            AlcoholChoice::No => "No",
        }
    }
}

impl From<bool> for AlcoholChoice {
    fn from(value: bool) -> Self {
        if value {
            AlcoholChoice::Yes
        } else {
            AlcoholChoice::No
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub weekly_calories_burned: u32,
    pub weekly_steps: u32,
    pub daily_sleep_hours: f64,
    pub health_goals: String,
    pub dietary_preferences: String,
    pub health_conditions: String,
    pub drinks_alcohol: bool,
    pub include_alcohol_in_plan: AlcoholChoice,
}

impl UserProfile {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.age > MAX_AGE {
            return Err(CoreError::Invalid(format!(
                "age must be between 0 and {MAX_AGE}"
            )));
        }

        for (field, value) in [
            ("height_cm", self.height_cm),
            ("weight_kg", self.weight_kg),
            ("daily_sleep_hours", self.daily_sleep_hours),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Invalid(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }

        Ok(())
    }

    /// The alcohol choice only counts for users who drink.
    pub fn effective_alcohol_choice(&self) -> AlcoholChoice {
        if self.drinks_alcohol {
            self.include_alcohol_in_plan
        } else {
            AlcoholChoice::No
        }
    }
}
