//! Gemini API recommender adapter

use async_trait::async_trait;

use crate::application::ports::{RecommendationError, Recommender};
use crate::domain::config::DEFAULT_GEMINI_MODEL;
use crate::domain::duration::Duration;
use crate::domain::recommendation::{RecommendationPrompt, Utterance};
use crate::infrastructure::gemini::{GeminiClient, GeminiError, GenerateContentRequest, Part};
use crate::infrastructure::http_client;

impl From<GeminiError> for RecommendationError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::InvalidApiKey => Self::InvalidApiKey,
            GeminiError::RateLimited => Self::RateLimited,
            GeminiError::EmptyResponse => Self::EmptyResponse,
            GeminiError::RequestFailed(m) => Self::RequestFailed(m),
            GeminiError::ParseError(m) => Self::ParseError(m),
            GeminiError::ApiError(m) => Self::ApiError(m),
        }
    }
}

/// Mood recommender backed by Gemini `generateContent`
#[derive(Debug, Clone)]
pub struct GeminiRecommender {
    client: GeminiClient,
}

impl GeminiRecommender {
    /// Create a recommender with the default model and request timeout
    pub fn new(api_key: impl Into<String>) -> reqwest::Result<Self> {
        let http = http_client(Duration::default_request_timeout())?;
        Ok(Self::from_client(GeminiClient::new(http, api_key, DEFAULT_GEMINI_MODEL)))
    }

    pub fn from_client(client: GeminiClient) -> Self {
        Self { client }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Build the request body
    fn build_request(prompt: RecommendationPrompt) -> GenerateContentRequest {
        GenerateContentRequest::user(vec![Part::text(prompt.into_content())])
    }
}

#[async_trait]
impl Recommender for GeminiRecommender {
    async fn recommend(&self, utterance: &Utterance) -> Result<String, RecommendationError> {
        let body = Self::build_request(RecommendationPrompt::build(utterance));

        tracing::debug!(model = %self.client.model(), "Requesting recommendation from Gemini");

        self.client.generate(&body).await.map_err(|e| {
            tracing::warn!(error = %e, "Gemini recommendation failed");
            RecommendationError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_has_single_user_text_part() {
        let utterance = Utterance::parse("I'm exhausted after work").unwrap();
        let request = GeminiRecommender::build_request(RecommendationPrompt::build(&utterance));

        let json = serde_json::to_value(&request).unwrap();
        let parts = json["contents"][0]["parts"].as_array().unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(parts.len(), 1);
        assert!(parts[0]["text"]
            .as_str()
            .unwrap()
            .contains("\"I'm exhausted after work\""));
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn default_model() {
        assert_eq!(GeminiRecommender::new("key").unwrap().model(), "gemini-2.5-flash");
    }

    #[test]
    fn gemini_errors_map_one_to_one() {
        assert!(matches!(
            RecommendationError::from(GeminiError::RateLimited),
            RecommendationError::RateLimited
        ));
        assert!(matches!(
            RecommendationError::from(GeminiError::ApiError("boom".to_string())),
            RecommendationError::ApiError(m) if m == "boom"
        ));
    }
}
