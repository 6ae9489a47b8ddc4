use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source/target language selection for the translation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation service unavailable: {0}")]
    Unavailable(String),

    #[error("translation rejected: {0}")]
    Rejected(String),
}

/// Boundary to the external translation engine. Text in, text out; callers
/// that cannot afford to fail (the chat channel) fall back to the original
/// text on any error.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> Result<String, TranslationError>;
}
