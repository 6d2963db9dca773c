use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Missing or invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    /// The nutrition database answered but had no usable match.
    #[error("No nutrition data found for the requested food")]
    LookupMiss,

    /// The nutrition database could not be reached or answered garbage.
    #[error("Nutrition lookup failed: {0}")]
    LookupTransport(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Guideline index unavailable: {0}")]
    GuidelineIndex(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,
}
