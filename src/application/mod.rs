//! Application layer - Use cases and port interfaces
//!
//! Contains the request pipelines and trait definitions
//! for external system interactions.

pub mod pipeline;
pub mod ports;

// Re-export use cases
pub use pipeline::{MoodPipeline, PipelineError, PipelineStage};
