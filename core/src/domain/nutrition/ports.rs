use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::NutritionRecord,
        value_objects::{FoodQuery, LookupFoodInput, NutritionDossier},
    },
};

/// Port for the external food database.
///
/// `Ok(None)` means the database answered without a usable match; `Err`
/// means it could not be queried at all.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionRepository: Send + Sync {
    fn lookup(
        &self,
        query: FoodQuery,
    ) -> impl Future<Output = Result<Option<NutritionRecord>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn lookup_food(
        &self,
        input: LookupFoodInput,
    ) -> impl Future<Output = Result<NutritionRecord, CoreError>> + Send;

    /// Never fails: misses and transport errors become placeholder entries.
    fn build_dossier(
        &self,
        foods: Vec<FoodQuery>,
    ) -> impl Future<Output = NutritionDossier> + Send;
}
