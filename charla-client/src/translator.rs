use async_trait::async_trait;
use charla_core::{LanguagePair, TranslationError, Translator};
use serde::Deserialize;
use serde_json::json;

/// Client for the external translation collaborator
/// (`POST /translate` with `{text, source_lang, target_lang}`).
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Deserialize)]
struct TranslatedBody {
    translated_text: String,
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> Result<String, TranslationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({
                "text": text,
                "source_lang": languages.source,
                "target_lang": languages.target,
            }))
            .send()
            .await
            .map_err(|e| TranslationError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslationError::Rejected(format!(
                "status {}",
                response.status()
            )));
        }

        let body: TranslatedBody = response
            .json()
            .await
            .map_err(|e| TranslationError::Unavailable(e.to_string()))?;

        Ok(body.translated_text)
    }
}
