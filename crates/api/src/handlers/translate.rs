//! Handlers for the machine-translation pass-through.
//!
//! Translation failures are 503. Language listing and detection always
//! answer, with a `note` when the fallback was used.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use smartnews_adapters::fallback::BestEffort;
use smartnews_adapters::translate::{
    MachineTranslation, TranslateRequest, DEFAULT_FORMAT, DEFAULT_SOURCE, DEFAULT_TARGET,
};
use smartnews_core::language::{detect_heuristic, DetectedLanguage, Language};

use crate::error::{unavailable_on_outage, AppResult};
use crate::extract::ApiJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Name of the engine, echoed to the reader.
const SERVICE_NAME: &str = "LibreTranslate";

const LANGUAGES_FALLBACK_NOTE: &str = "Default language list (LibreTranslate API unavailable)";
const DETECT_FALLBACK_NOTE: &str = "Fallback detection (API unavailable)";

#[derive(Debug, Deserialize)]
pub struct TranslateInput {
    #[serde(default)]
    pub text: String,
    pub source: Option<String>,
    pub target: Option<String>,
    pub format: Option<String>,
}

impl From<TranslateInput> for TranslateRequest {
    fn from(input: TranslateInput) -> Self {
        Self {
            text: input.text,
            source: input.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            target: input.target.unwrap_or_else(|| DEFAULT_TARGET.to_string()),
            format: input.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DetectInput {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslationBody {
    #[serde(flatten)]
    pub translation: MachineTranslation,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LanguagesBody {
    pub languages: Vec<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectBody {
    pub detected_language: DetectedLanguage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_detections: Option<Vec<DetectedLanguage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// POST /api/translate
pub async fn translate_text(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TranslateInput>,
) -> AppResult<Json<SuccessResponse<TranslationBody>>> {
    let request = TranslateRequest::from(input);
    let translation = state
        .translate
        .translate(&request)
        .await
        .map_err(unavailable_on_outage("Translation service is temporarily unavailable"))?;

    tracing::info!(
        from_lang = %translation.source_lang,
        to_lang = %translation.target_lang,
        chars = translation.original_text.chars().count(),
        "Machine translation served",
    );

    Ok(Json(SuccessResponse::new(TranslationBody {
        translation,
        service: SERVICE_NAME,
    })))
}

/// GET /api/translate/languages
pub async fn list_languages(State(state): State<AppState>) -> Json<SuccessResponse<LanguagesBody>> {
    let body = match state.translate.languages().await {
        BestEffort::Fresh(languages) => LanguagesBody {
            languages,
            note: None,
        },
        BestEffort::Fallback { value, .. } => LanguagesBody {
            languages: value,
            note: Some(LANGUAGES_FALLBACK_NOTE),
        },
    };
    Json(SuccessResponse::new(body))
}

/// POST /api/translate/detect
pub async fn detect_language(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<DetectInput>,
) -> AppResult<Json<SuccessResponse<DetectBody>>> {
    let body = match state.translate.detect(&input.text).await? {
        BestEffort::Fresh(detections) => DetectBody {
            detected_language: detections
                .first()
                .cloned()
                .unwrap_or_else(|| detect_heuristic(&input.text)),
            all_detections: Some(detections),
            note: None,
        },
        BestEffort::Fallback { value, .. } => DetectBody {
            detected_language: value
                .into_iter()
                .next()
                .unwrap_or_else(|| detect_heuristic(&input.text)),
            all_detections: None,
            note: Some(DETECT_FALLBACK_NOTE),
        },
    };
    Ok(Json(SuccessResponse::new(body)))
}
