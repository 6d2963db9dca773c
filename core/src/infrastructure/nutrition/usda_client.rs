use reqwest::Client;
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionRecord, ports::NutritionRepository, value_objects::FoodQuery},
};

const API_KEY_HEADER: &str = "X-Api-Key";

/// FoodData Central search client. Only the first match of a search is used.
#[derive(Debug, Clone)]
pub struct UsdaNutritionClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) foods: Option<Vec<UsdaFood>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsdaFood {
    pub(crate) description: Option<String>,
    pub(crate) serving_size: Option<Number>,
    pub(crate) serving_size_unit: Option<String>,
    #[serde(default)]
    pub(crate) food_nutrients: Vec<UsdaNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsdaNutrient {
    pub(crate) nutrient_name: Option<String>,
    pub(crate) unit_name: Option<String>,
    pub(crate) value: Option<Value>,
}

impl UsdaNutritionClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn search(&self, query: &FoodQuery) -> Result<SearchResponse, CoreError> {
        let url = format!("{}/foods/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query.as_str())])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("USDA API request failed: {}", e);
                CoreError::LookupTransport(format!("USDA API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("USDA API error: {} - {}", status, error_text);
            return Err(CoreError::LookupTransport(format!(
                "USDA API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse USDA response: {}", e);
            CoreError::LookupTransport(format!("Failed to parse USDA response: {}", e))
        })
    }
}

impl NutritionRepository for UsdaNutritionClient {
    async fn lookup(&self, query: FoodQuery) -> Result<Option<NutritionRecord>, CoreError> {
        let response = self.search(&query).await?;

        Ok(response
            .foods
            .and_then(|foods| foods.into_iter().next())
            .map(|food| food.into_record(&query)))
    }
}
