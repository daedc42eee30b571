//! Audio payload value object

use std::fmt;

/// Audio encodings the gateway recognises in uploads.
/// Whether a provider actually accepts a given encoding is the provider's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioMimeType {
    #[default]
    Webm,
    Ogg,
    Mp3,
    Mpeg,
    Wav,
    Flac,
    Mp4,
    M4a,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Flac => "audio/flac",
            Self::Mp4 => "audio/mp4",
            Self::M4a => "audio/m4a",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Webm => "webm",
            Self::Ogg => "ogg",
            Self::Mp3 | Self::Mpeg => "mp3",
            Self::Wav => "wav",
            Self::Flac => "flac",
            Self::Mp4 => "mp4",
            Self::M4a => "m4a",
        }
    }

    /// Parse a declared content type such as `audio/webm;codecs=opus`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "audio/webm" | "video/webm" => Some(Self::Webm),
            "audio/ogg" | "audio/opus" => Some(Self::Ogg),
            "audio/mp3" => Some(Self::Mp3),
            "audio/mpeg" | "audio/mpga" => Some(Self::Mpeg),
            "audio/wav" | "audio/wave" | "audio/x-wav" => Some(Self::Wav),
            "audio/flac" | "audio/x-flac" => Some(Self::Flac),
            "audio/mp4" | "video/mp4" => Some(Self::Mp4),
            "audio/m4a" | "audio/x-m4a" => Some(Self::M4a),
            _ => None,
        }
    }

    /// Guess the encoding from an uploaded file name's extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "webm" => Some(Self::Webm),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "mp3" | "mpga" => Some(Self::Mpeg),
            "wav" => Some(Self::Wav),
            "flac" => Some(Self::Flac),
            "mp4" => Some(Self::Mp4),
            "m4a" => Some(Self::M4a),
            _ => None,
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw audio bytes plus their declared encoding.
/// Owned by a single request and dropped with it.
#[derive(Debug, Clone)]
pub struct AudioData {
    data: Vec<u8>,
    mime_type: AudioMimeType,
}

impl AudioData {
    pub fn new(data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self { data, mime_type }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// File name to present to providers that infer format from it
    pub fn file_name(&self) -> String {
        format!("audio.{}", self.mime_type.extension())
    }

    /// Encode the audio data as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mime_strips_parameters() {
        assert_eq!(
            AudioMimeType::from_mime("audio/webm;codecs=opus"),
            Some(AudioMimeType::Webm)
        );
        assert_eq!(
            AudioMimeType::from_mime(" AUDIO/WAV "),
            Some(AudioMimeType::Wav)
        );
    }

    #[test]
    fn from_mime_unknown() {
        assert_eq!(AudioMimeType::from_mime("application/octet-stream"), None);
        assert_eq!(AudioMimeType::from_mime(""), None);
    }

    #[test]
    fn from_file_name_uses_extension() {
        assert_eq!(
            AudioMimeType::from_file_name("voice.M4A"),
            Some(AudioMimeType::M4a)
        );
        assert_eq!(
            AudioMimeType::from_file_name("clip.mp3"),
            Some(AudioMimeType::Mpeg)
        );
        assert_eq!(AudioMimeType::from_file_name("noext"), None);
        assert_eq!(AudioMimeType::from_file_name("notes.txt"), None);
    }

    #[test]
    fn empty_payload() {
        let audio = AudioData::new(Vec::new(), AudioMimeType::Webm);
        assert!(audio.is_empty());
        assert_eq!(audio.size_bytes(), 0);
    }

    #[test]
    fn human_readable_size_units() {
        assert_eq!(
            AudioData::new(vec![0u8; 500], AudioMimeType::Ogg).human_readable_size(),
            "500 B"
        );
        assert_eq!(
            AudioData::new(vec![0u8; 2048], AudioMimeType::Ogg).human_readable_size(),
            "2.0 KB"
        );
        assert_eq!(
            AudioData::new(vec![0u8; 3 * 1024 * 1024], AudioMimeType::Ogg).human_readable_size(),
            "3.0 MB"
        );
    }

    #[test]
    fn file_name_matches_extension() {
        let audio = AudioData::new(vec![1], AudioMimeType::Flac);
        assert_eq!(audio.file_name(), "audio.flac");
    }

    #[test]
    fn to_base64_decodes_back() {
        use base64::Engine;
        let audio = AudioData::new(vec![1, 2, 3, 4], AudioMimeType::Wav);
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(audio.to_base64())
            .unwrap();
        assert_eq!(decoded, vec![1, 2, 3, 4]);
    }
}
