//! MoodCart - mood-based product recommendations over HTTP
//!
//! Accepts typed text or a voice recording, turns it into a single utterance
//! (transcribing audio when needed) and asks Google Gemini for a short JSON
//! recommendation, which is returned to the caller as-is.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (utterance, prompt, audio, config) and errors
//! - **Application**: The recommendation pipeline and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, OpenAI, XDG config, tracing)
//! - **Server**: axum router, handlers and HTTP error mapping
//! - **CLI**: Argument parsing, config subcommand, server runner and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod server;
