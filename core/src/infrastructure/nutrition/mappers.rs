use serde_json::Value;

use crate::{
    domain::nutrition::{
        entities::{MISSING_FIELD_PLACEHOLDER, NutritionRecord},
        value_objects::FoodQuery,
    },
    infrastructure::nutrition::usda_client::{UsdaFood, UsdaNutrient},
};

fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_FIELD_PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl UsdaNutrient {
    pub(crate) fn name(&self) -> String {
        self.nutrient_name
            .clone()
            .unwrap_or_else(|| MISSING_FIELD_PLACEHOLDER.to_string())
    }

    pub(crate) fn amount(&self) -> String {
        format!(
            "{} {}",
            render_value(self.value.as_ref()),
            self.unit_name.as_deref().unwrap_or(MISSING_FIELD_PLACEHOLDER)
        )
    }
}

impl UsdaFood {
    /// The query stands in for a missing description.
    pub(crate) fn into_record(self, query: &FoodQuery) -> NutritionRecord {
        let food_name = self
            .description
            .unwrap_or_else(|| query.as_str().to_string());

        let mut record = NutritionRecord::new(food_name, self.serving_size, self.serving_size_unit);
        for nutrient in &self.food_nutrients {
            record.insert_nutrient(nutrient.name(), nutrient.amount());
        }

        record
    }
}
