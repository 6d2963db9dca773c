use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    guideline::ports::GuidelineRetriever,
    meal_plan::ports::LLMClient,
    nutrition::{
        entities::NutritionRecord,
        ports::{NutritionRepository, NutritionService},
        value_objects::{DossierEntry, FoodQuery, LookupFoodInput, NutritionDossier},
    },
};

/// Looks up every distinct food once, concurrently, and lays the outcomes
/// back out in request order.
pub async fn aggregate_nutrition<N>(repository: &N, foods: &[FoodQuery]) -> NutritionDossier
where
    N: NutritionRepository,
{
    let mut seen: HashSet<&FoodQuery> = HashSet::new();
    let distinct = foods.iter().filter(|food| seen.insert(*food));

    let lookups = distinct.map(|query| async move {
        let record = lookup_or_miss(repository, query.clone()).await;
        (query, record)
    });

    let resolved: HashMap<&FoodQuery, Option<NutritionRecord>> =
        join_all(lookups).await.into_iter().collect();

    let entries = foods
        .iter()
        .map(|query| match resolved.get(query).cloned().flatten() {
            Some(record) => DossierEntry::Found {
                query: query.clone(),
                record,
            },
            None => DossierEntry::NotFound {
                query: query.clone(),
            },
        })
        .collect();

    NutritionDossier::new(entries)
}

async fn lookup_or_miss<N>(repository: &N, query: FoodQuery) -> Option<NutritionRecord>
where
    N: NutritionRepository,
{
    match repository.lookup(query.clone()).await {
        Ok(Some(record)) => Some(record),
        Ok(None) => {
            tracing::debug!(food = %query, "no nutrition match");
            None
        }
        Err(e) => {
            tracing::warn!(food = %query, error = %e, "nutrition lookup failed");
            None
        }
    }
}

impl<N, LLM, G> NutritionService for Service<N, LLM, G>
where
    N: NutritionRepository,
    LLM: LLMClient,
    G: GuidelineRetriever,
{
    #[instrument(skip(self), fields(food = %input.food_name))]
    async fn lookup_food(&self, input: LookupFoodInput) -> Result<NutritionRecord, CoreError> {
        let query = FoodQuery::parse(&input.food_name)?;

        self.nutrition_repository
            .lookup(query)
            .await?
            .ok_or(CoreError::LookupMiss)
    }

    #[instrument(skip(self, foods), fields(foods = foods.len()))]
    async fn build_dossier(&self, foods: Vec<FoodQuery>) -> NutritionDossier {
        aggregate_nutrition(&self.nutrition_repository, &foods).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{
        guideline::ports::MockGuidelineRetriever, meal_plan::ports::MockLLMClient,
        nutrition::ports::MockNutritionRepository,
    };

    pub(crate) fn chicken_record() -> NutritionRecord {
        let mut record = NutritionRecord::new(
            "Chicken, broilers or fryers, breast, meat only, cooked, roasted".to_string(),
            Some(serde_json::Number::from(100)),
            Some("g".to_string()),
        );
        record.insert_nutrient("Protein".to_string(), "31.0 G".to_string());
        record.insert_nutrient("Total lipid (fat)".to_string(), "3.57 G".to_string());
        record.insert_nutrient("Energy".to_string(), "165 KCAL".to_string());
        record
    }

    fn foods(names: &[&str]) -> Vec<FoodQuery> {
        names.iter().map(|n| FoodQuery::parse(n).unwrap()).collect()
    }

    fn service(
        repository: MockNutritionRepository,
    ) -> Service<MockNutritionRepository, MockLLMClient, MockGuidelineRetriever> {
        Service::new(
            repository,
            MockLLMClient::new(),
            MockGuidelineRetriever::new(),
            3,
        )
    }

    #[tokio::test]
    async fn test_aggregate_preserves_order_when_second_food_missing() {
        let mut repository = MockNutritionRepository::new();
        repository
            .expect_lookup()
            .withf(|q| q.as_str() == "chicken")
            .times(1)
            .returning(|_| Box::pin(async { Ok(Some(chicken_record())) }));
        repository
            .expect_lookup()
            .withf(|q| q.as_str() == "rice")
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let dossier = aggregate_nutrition(&repository, &foods(&["chicken", "rice"])).await;

        assert_eq!(dossier.len(), 2);
        let blocks = dossier.blocks();
        assert_eq!(blocks[0], chicken_record().render());
        assert_eq!(blocks[1], "**Rice**: Nutritional information not found.");
    }

    #[tokio::test]
    async fn test_aggregate_absorbs_transport_errors() {
        let mut repository = MockNutritionRepository::new();
        repository.expect_lookup().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::LookupTransport("connection refused".to_string())) })
        });

        let dossier = aggregate_nutrition(&repository, &foods(&["eggs"])).await;

        assert_eq!(
            dossier.blocks(),
            vec!["**Eggs**: Nutritional information not found.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_aggregate_looks_up_duplicates_once_but_renders_each() {
        let mut repository = MockNutritionRepository::new();
        repository
            .expect_lookup()
            .withf(|q| q.as_str() == "chicken")
            .times(1)
            .returning(|_| Box::pin(async { Ok(Some(chicken_record())) }));
        repository
            .expect_lookup()
            .withf(|q| q.as_str() == "fish")
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let dossier =
            aggregate_nutrition(&repository, &foods(&["chicken", "fish", "Chicken "])).await;

        let queries: Vec<_> = dossier.queries().into_iter().map(FoodQuery::as_str).collect();
        assert_eq!(queries, vec!["chicken", "fish", "chicken"]);
        assert!(dossier.entries[0].is_found());
        assert!(!dossier.entries[1].is_found());
        assert_eq!(dossier.entries[0], dossier.entries[2]);
    }

    #[tokio::test]
    async fn test_aggregate_empty_list_makes_no_calls() {
        let repository = MockNutritionRepository::new();
        let dossier = aggregate_nutrition(&repository, &[]).await;
        assert!(dossier.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_food_reports_miss() {
        let mut repository = MockNutritionRepository::new();
        repository
            .expect_lookup()
            .withf(|q| q.as_str() == "unicorn-meat")
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(repository)
            .lookup_food(LookupFoodInput {
                food_name: " Unicorn-Meat".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::LookupMiss));
    }

    #[tokio::test]
    async fn test_lookup_food_surfaces_transport_error() {
        let mut repository = MockNutritionRepository::new();
        repository.expect_lookup().returning(|_| {
            Box::pin(async { Err(CoreError::LookupTransport("HTTP 503".to_string())) })
        });

        let result = service(repository)
            .lookup_food(LookupFoodInput {
                food_name: "rice".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::LookupTransport(_))));
    }

    #[tokio::test]
    async fn test_lookup_food_rejects_blank_name_without_calling_database() {
        let repository = MockNutritionRepository::new();
        let result = service(repository)
            .lookup_food(LookupFoodInput {
                food_name: "  ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
