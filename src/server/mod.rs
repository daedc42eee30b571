//! HTTP layer - axum router exposing the two recommendation pipelines

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::{create_router, MAX_AUDIO_BYTES};
pub use state::AppState;
