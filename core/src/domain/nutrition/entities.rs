use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

pub const DEFAULT_SERVING_SIZE: u64 = 100;
pub const DEFAULT_SERVING_SIZE_UNIT: &str = "g";
/// Rendered in place of a missing nutrient name, value or unit.
pub const MISSING_FIELD_PLACEHOLDER: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Nutrient {
    pub name: String,
    /// Rendered as "{value} {unit}".
    pub amount: String,
}

/// Nutrition facts for the first database match of a food query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionRecord {
    pub food_name: String,
    #[schema(value_type = f64)]
    pub serving_size: Number,
    pub serving_size_unit: String,
    pub nutrients: Vec<Nutrient>,
}

impl NutritionRecord {
    pub fn new(food_name: String, serving_size: Option<Number>, unit: Option<String>) -> Self {
        Self {
            food_name,
            serving_size: serving_size.unwrap_or_else(|| Number::from(DEFAULT_SERVING_SIZE)),
            serving_size_unit: unit.unwrap_or_else(|| DEFAULT_SERVING_SIZE_UNIT.to_string()),
            nutrients: Vec::new(),
        }
    }

    /// Keeps first-seen order; a repeated name overwrites the earlier value.
    pub fn insert_nutrient(&mut self, name: String, amount: String) {
        match self.nutrients.iter_mut().find(|n| n.name == name) {
            Some(existing) => existing.amount = amount,
            None => self.nutrients.push(Nutrient { name, amount }),
        }
    }

    pub fn nutrient(&self, name: &str) -> Option<&str> {
        self.nutrients
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.amount.as_str())
    }

    pub fn render(&self) -> String {
        let nutrients = self
            .nutrients
            .iter()
            .map(|n| format!("{}: {}", n.name, n.amount))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "**{}** ({} {}):\n{}",
            self.food_name, self.serving_size, self.serving_size_unit, nutrients
        )
    }
}
