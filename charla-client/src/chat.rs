use crate::speech::{SpeechError, SpeechRecognizer, SpeechSynthesizer};
use charla_core::{LanguagePair, SignalMessage, Translator};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Me,
    Peer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Free-text chat over the same relay as signaling. Completely independent
/// of negotiation state: messages flow whether or not a call ever connects.
pub struct ChatChannel {
    outbound: mpsc::UnboundedSender<SignalMessage>,
    transcript: Vec<TranscriptEntry>,
    translator: Arc<dyn Translator>,
    speech: Arc<dyn SpeechSynthesizer>,
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    languages: LanguagePair,
}

impl ChatChannel {
    pub fn new(
        outbound: mpsc::UnboundedSender<SignalMessage>,
        translator: Arc<dyn Translator>,
        speech: Arc<dyn SpeechSynthesizer>,
        languages: LanguagePair,
    ) -> Self {
        Self {
            outbound,
            transcript: Vec::new(),
            translator,
            speech,
            recognizer: None,
            languages,
        }
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn set_languages(&mut self, languages: LanguagePair) {
        self.languages = languages;
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Relay `text` and record it locally. Whitespace-only input is a
    /// complete no-op: no frame, no transcript entry.
    pub fn send(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        self.transcript.push(TranscriptEntry {
            speaker: Speaker::Me,
            text: text.to_string(),
        });
        let _ = self.outbound.send(SignalMessage::Chat(text.to_string()));
    }

    /// A chat message arrived from the remote peer: record the original,
    /// then speak the translated rendition. Translation is fail-open and
    /// never blocks or drops the message.
    pub async fn on_receive(&mut self, text: String) {
        self.transcript.push(TranscriptEntry {
            speaker: Speaker::Peer,
            text: text.clone(),
        });

        let spoken = self.translated(&text).await;
        self.speech.speak(&spoken, &self.languages.target).await;
    }

    /// Capture speech through the recognizer boundary and relay the
    /// recognized text as an ordinary chat message.
    pub async fn send_spoken(&mut self) -> Result<(), SpeechError> {
        let Some(recognizer) = self.recognizer.clone() else {
            return Err(SpeechError("no speech recognizer configured".into()));
        };

        let text = recognizer.recognize(&self.languages.source).await?;
        self.send(&text);
        Ok(())
    }

    async fn translated(&self, text: &str) -> String {
        if self.languages.is_identity() {
            return text.to_string();
        }

        match self.translator.translate(text, &self.languages).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation failed, falling back to original text: {}", e);
                text.to_string()
            }
        }
    }
}
