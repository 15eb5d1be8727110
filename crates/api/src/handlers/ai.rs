//! Handlers for the generative-AI learning modes and text-to-speech.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use smartnews_adapters::speech::SpeechOutcome;
use smartnews_core::error::CoreError;
use smartnews_core::quiz::QuizItem;
use smartnews_core::text::is_blank;
use smartnews_core::translation::{GrammarCheck, TranslationResult};

use crate::error::{unavailable_on_outage, AppResult};
use crate::extract::ApiJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body carrying a word, phrase or sentence.
#[derive(Debug, Deserialize)]
pub struct TextInput {
    #[serde(default)]
    pub text: String,
}

/// Request body carrying article content.
#[derive(Debug, Deserialize)]
pub struct ContentInput {
    #[serde(default)]
    pub content: String,
}

/// Request body for `explain`: the selection and its sentence.
#[derive(Debug, Deserialize)]
pub struct ExplainInput {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub result: TranslationResult,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizItem>,
}

#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub explanation: String,
}

fn require(value: &str, message: &str) -> AppResult<()> {
    if is_blank(value) {
        return Err(CoreError::Validation(message.to_string()).into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Learning modes
// ---------------------------------------------------------------------------

/// POST /api/ai/translate
///
/// Structured English-Vietnamese translation, ready to save as a flashcard.
pub async fn translate(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TextInput>,
) -> AppResult<Json<TranslateResponse>> {
    require(&input.text, "Thiếu từ cần dịch")?;

    let result = state.generative.translate(input.text.trim()).await?;
    tracing::info!(original = %result.original, "AI translation served");

    Ok(Json(TranslateResponse { result }))
}

/// POST /api/ai/summarize
///
/// Article content is truncated before it reaches the model. An outage is
/// reported as 503 so the reader can offer a retry.
pub async fn summarize(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ContentInput>,
) -> AppResult<Json<SummaryResponse>> {
    require(&input.content, "Thiếu nội dung bài báo")?;

    let summary = state
        .generative
        .summarize(&input.content)
        .await
        .map_err(unavailable_on_outage("AI summary is temporarily unavailable"))?;

    Ok(Json(SummaryResponse { summary }))
}

/// POST /api/ai/quiz
pub async fn quiz(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ContentInput>,
) -> AppResult<Json<QuizResponse>> {
    require(&input.content, "Thiếu nội dung bài báo")?;

    let quiz = state.generative.quiz(&input.content).await?;
    tracing::info!(questions = quiz.len(), "Quiz generated");

    Ok(Json(QuizResponse { quiz }))
}

/// POST /api/ai/grammar
///
/// Returns the check result itself: `{ isCorrect, corrected, explanation }`.
pub async fn grammar(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TextInput>,
) -> AppResult<Json<GrammarCheck>> {
    require(&input.text, "Thiếu câu cần kiểm tra")?;

    let check = state.generative.grammar(&input.text).await?;
    Ok(Json(check))
}

/// POST /api/ai/explain
pub async fn explain(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ExplainInput>,
) -> AppResult<Json<ExplanationResponse>> {
    require(&input.text, "Thiếu từ cần giải thích")?;

    let explanation = state
        .generative
        .explain(input.text.trim(), &input.context)
        .await?;

    Ok(Json(ExplanationResponse { explanation }))
}

// ---------------------------------------------------------------------------
// Speech
// ---------------------------------------------------------------------------

/// POST /api/ai/text-to-speech
///
/// `{ success, audioBase64, format }`, or `{ success, useWebSpeech: true }`
/// when server synthesis fails. Only a missing `text` is an error.
pub async fn text_to_speech(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TextInput>,
) -> AppResult<Json<SuccessResponse<SpeechOutcome>>> {
    require(&input.text, "Text is required")?;

    let outcome = state.speech.speak(&input.text).await;
    Ok(Json(SuccessResponse::new(outcome)))
}
