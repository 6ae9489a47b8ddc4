use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct SpeechError(pub String);

/// Text-to-speech boundary: speak `text` aloud in `lang`. Local service,
/// fire-and-forget.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str, lang: &str);
}

/// Speech-to-text boundary: capture one utterance in `lang` and return the
/// recognized text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, lang: &str) -> Result<String, SpeechError>;
}
