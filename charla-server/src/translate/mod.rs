//! HTTP surface of the translation collaborator. The engine behind it is
//! external; anything that actually translates implements
//! [`charla_core::Translator`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use charla_core::{LanguagePair, TranslationError, Translator};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

#[derive(Serialize)]
struct TranslatedBody {
    translated_text: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn router(engine: Arc<dyn Translator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/translate", post(translate))
        .layer(cors)
        .with_state(engine)
}

async fn translate(
    State(engine): State<Arc<dyn Translator>>,
    Json(body): Json<Value>,
) -> Response {
    // an empty string counts as no text at all
    let text = match body.get("text") {
        Some(t) if !t.is_null() && t.as_str() != Some("") => t,
        _ => return bad_request("no text provided to translate"),
    };

    let source = body
        .get("source_lang")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());
    let target = body
        .get("target_lang")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());
    let (Some(source), Some(target)) = (source, target) else {
        return bad_request("missing source or target language");
    };

    let Some(text) = text.as_str() else {
        return bad_request("text must be a string");
    };

    let languages = LanguagePair::new(source, target);
    match engine.translate(text, &languages).await {
        Ok(translated_text) => Json(TranslatedBody { translated_text }).into_response(),
        Err(e) => {
            error!("Translation engine failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "internal translation error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Stand-in engine for deployments where no model is wired up yet. It
/// returns the input untouched, which downstream chat treats the same as
/// an identity language pair.
pub struct PassthroughTranslator;

#[async_trait::async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(
        &self,
        text: &str,
        _languages: &LanguagePair,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}
