use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, nutrition::entities::NutritionRecord,
};

/// A food name as sent to the nutrition database: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FoodQuery(String);

impl FoodQuery {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CoreError::Invalid("food name must not be empty".to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character upper-cased, the rest lower-cased.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for FoodQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a comma-separated food list, keeping order and duplicates.
pub fn parse_food_list(raw: &str) -> Vec<FoodQuery> {
    raw.split(',')
        .filter_map(|segment| FoodQuery::parse(segment).ok())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DossierEntry {
    Found {
        query: FoodQuery,
        record: NutritionRecord,
    },
    NotFound {
        query: FoodQuery,
    },
}

impl DossierEntry {
    pub fn query(&self) -> &FoodQuery {
        match self {
            DossierEntry::Found { query, .. } | DossierEntry::NotFound { query } => query,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DossierEntry::Found { .. })
    }

    pub fn render(&self) -> String {
        match self {
            DossierEntry::Found { record, .. } => record.render(),
            DossierEntry::NotFound { query } => format!(
                "**{}**: Nutritional information not found.",
                query.capitalized()
            ),
        }
    }
}

/// Rendered nutrition facts for every requested food, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionDossier {
    pub entries: Vec<DossierEntry>,
}

impl NutritionDossier {
    pub fn new(entries: Vec<DossierEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn blocks(&self) -> Vec<String> {
        self.entries.iter().map(DossierEntry::render).collect()
    }

    pub fn queries(&self) -> Vec<&FoodQuery> {
        self.entries.iter().map(DossierEntry::query).collect()
    }

    pub fn render(&self) -> String {
        self.blocks().join("\n\n")
    }
}

#[derive(Debug, Clone)]
pub struct LookupFoodInput {
    pub food_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_query_is_trimmed_and_lowercased() {
        let query = FoodQuery::parse("  Chicken Breast ").unwrap();
        assert_eq!(query.as_str(), "chicken breast");
    }

    #[test]
    fn test_food_query_rejects_blank() {
        assert!(matches!(FoodQuery::parse("   "), Err(CoreError::Invalid(_))));
    }

    #[test]
    fn test_capitalized_matches_sentence_case() {
        let query = FoodQuery::parse("unicorn-meat").unwrap();
        assert_eq!(query.capitalized(), "Unicorn-meat");
    }

    #[test]
    fn test_parse_food_list_keeps_order_and_duplicates() {
        let foods = parse_food_list("chicken, Rice,, eggs ,chicken");
        let names: Vec<_> = foods.iter().map(FoodQuery::as_str).collect();
        assert_eq!(names, vec!["chicken", "rice", "eggs", "chicken"]);
    }

    #[test]
    fn test_not_found_entry_renders_placeholder() {
        let entry = DossierEntry::NotFound {
            query: FoodQuery::parse("rice").unwrap(),
        };
        assert_eq!(entry.render(), "**Rice**: Nutritional information not found.");
        assert!(!entry.is_found());
    }

    #[test]
    fn test_dossier_render_separates_blocks_with_blank_line() {
        let dossier = NutritionDossier::new(vec![
            DossierEntry::NotFound {
                query: FoodQuery::parse("rice").unwrap(),
            },
            DossierEntry::NotFound {
                query: FoodQuery::parse("fish").unwrap(),
            },
        ]);
        assert_eq!(
            dossier.render(),
            "**Rice**: Nutritional information not found.\n\n**Fish**: Nutritional information not found."
        );
    }
}
