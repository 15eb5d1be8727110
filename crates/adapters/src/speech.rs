//! Speech adapter: server-side synthesis with a client-side fallback.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use smartnews_core::text::{truncate_chars, MAX_SPEECH_CHARS};

use crate::error::AdapterError;

/// Synthesized audio as returned by the speech service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audio {
    pub bytes: Vec<u8>,
    /// Container format tag, e.g. `wav` or `flac`.
    pub format: String,
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Audio, AdapterError>;
}

/// What the reader should do to play the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SpeechOutcome {
    /// Play the returned audio.
    #[serde(rename_all = "camelCase")]
    Audio { audio_base64: String, format: String },
    /// Synthesize locally with the browser's speech engine.
    #[serde(rename_all = "camelCase")]
    UseClientSpeech {
        use_web_speech: bool,
        message: String,
    },
}

/// Message sent along with the client-side fallback.
pub const CLIENT_SPEECH_MESSAGE: &str = "Server TTS failed, switching to Browser TTS";

pub struct SpeechAdapter {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SpeechAdapter {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Synthesize up to [`MAX_SPEECH_CHARS`] characters of `text`.
    ///
    /// Never fails: any synthesis error turns into
    /// [`SpeechOutcome::UseClientSpeech`].
    pub async fn speak(&self, text: &str) -> SpeechOutcome {
        let text = truncate_chars(text, MAX_SPEECH_CHARS);
        match self.synthesizer.synthesize(text).await {
            Ok(audio) => {
                tracing::debug!(bytes = audio.bytes.len(), format = %audio.format, "Synthesized speech");
                SpeechOutcome::Audio {
                    audio_base64: STANDARD.encode(&audio.bytes),
                    format: audio.format,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Speech synthesis failed, falling back to client speech");
                SpeechOutcome::UseClientSpeech {
                    use_web_speech: true,
                    message: CLIENT_SPEECH_MESSAGE.to_string(),
                }
            }
        }
    }
}
