use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A chunk of the reference guideline document that matched a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GuidelineExcerpt {
    /// Zero-based chunk index within the document.
    pub position: usize,
    pub text: String,
    /// Number of distinct query terms found in the chunk.
    pub score: usize,
}
