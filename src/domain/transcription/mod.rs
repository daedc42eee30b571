//! Transcription domain module

mod audio_data;
mod provider;

pub use audio_data::{AudioData, AudioMimeType};
pub use provider::TranscriptionProvider;
