//! Recommendation domain module

mod prompt;
mod utterance;

pub use prompt::RecommendationPrompt;
pub use utterance::Utterance;
