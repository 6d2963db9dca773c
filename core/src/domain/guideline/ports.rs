use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, guideline::entities::GuidelineExcerpt};

/// Read-only lookup into the dietary guideline reference.
#[cfg_attr(test, mockall::automock)]
pub trait GuidelineRetriever: Send + Sync {
    fn retrieve(
        &self,
        query: String,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<GuidelineExcerpt>, CoreError>> + Send;
}
