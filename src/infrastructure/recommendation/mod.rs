//! Recommendation adapters

mod gemini;

pub use gemini::GeminiRecommender;
