use axum::Json;
use serde::Deserialize;
use smartnews_core::pronunciation::{score_pronunciation, PronunciationScore};

use crate::error::AppResult;
use crate::extract::ApiJson;

#[derive(Debug, Deserialize)]
pub struct ScoreInput {
    /// What the speech recognizer heard.
    #[serde(default)]
    pub transcript: String,
    /// The sentence the learner was asked to read.
    #[serde(default)]
    pub target: String,
}

/// POST /api/pronunciation/score
pub async fn score(ApiJson(input): ApiJson<ScoreInput>) -> AppResult<Json<PronunciationScore>> {
    let result = score_pronunciation(&input.transcript, &input.target)?;
    Ok(Json(result))
}
