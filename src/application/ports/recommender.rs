//! Recommendation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::ErrorKind;
use crate::domain::recommendation::Utterance;

/// Recommendation errors
#[derive(Debug, Clone, Error)]
pub enum RecommendationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty model response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl RecommendationError {
    /// Every recommendation failure is an upstream failure
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::UpstreamUnavailable
    }
}

/// Port for the generative-text capability
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Ask for a mood-based product recommendation.
    ///
    /// # Returns
    /// The provider's raw text, which is expected (not verified) to be a JSON
    /// object with `mood`, `product` and `reason` keys.
    async fn recommend(&self, utterance: &Utterance) -> Result<String, RecommendationError>;
}
