//! Recommendation prompt value object

use super::utterance::Utterance;

/// Persona line that opens every prompt
const PERSONA: &str = "You are a mood-based shopping recommender for an online store.";

/// Numbered instructions following the user's sentence
const INSTRUCTIONS: &str = r#"1. Detect their mood (example: tired, stressed, sad, happy, energetic, bored).
2. Recommend ONE product the user might want to buy.
3. Keep the recommendation short, simple, and friendly.
4. Respond ONLY in JSON with this structure:

{
  "mood": "...",
  "recommendation": "...",
  "product": "...",
  "reason": "..."
}

NO extra text."#;

/// The complete prompt sent to the generative-text capability.
/// Deterministic for a given utterance, which is embedded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationPrompt {
    content: String,
}

impl RecommendationPrompt {
    pub fn build(utterance: &Utterance) -> Self {
        let content = format!(
            "{}\n\nThe user entered: \"{}\"\n\n{}",
            PERSONA,
            utterance.as_str(),
            INSTRUCTIONS
        );
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}
