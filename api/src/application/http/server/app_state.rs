use std::sync::Arc;

use nutrimentor_core::application::NutrimentorService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrimentorService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrimentorService) -> Self {
        Self { args, service }
    }
}
