//! Google Gemini REST plumbing

mod client;

pub use client::{
    GeminiClient, GeminiError, GenerateContentRequest, GenerationConfig, Part, SystemInstruction,
    ThinkingConfig, API_BASE_URL,
};
