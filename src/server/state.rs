//! Shared router state

use std::sync::Arc;

use crate::application::ports::{Recommender, Transcriber};
use crate::application::MoodPipeline;

/// Everything handlers need; cloned per request, all read-only.
pub struct AppState<T, R>
where
    T: Transcriber,
    R: Recommender,
{
    pub pipeline: Arc<MoodPipeline<T, R>>,
}

impl<T, R> AppState<T, R>
where
    T: Transcriber,
    R: Recommender,
{
    pub fn new(pipeline: MoodPipeline<T, R>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

impl<T, R> Clone for AppState<T, R>
where
    T: Transcriber,
    R: Recommender,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}
