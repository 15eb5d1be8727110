use axum::extract::State;
use axum::Json;
use smartnews_core::dictionary::DictionaryEntry;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::state::AppState;

/// GET /api/dictionary/{word}
///
/// Headword, IPA, short English definitions and a Vietnamese gloss.
/// 404 when the dictionary has no entry; a missing gloss is not an error.
pub async fn lookup_word(
    State(state): State<AppState>,
    ApiPath(word): ApiPath<String>,
) -> AppResult<Json<DictionaryEntry>> {
    let entry = state.dictionary.lookup(&word).await?;

    tracing::info!(word = %entry.word, "Dictionary lookup served");

    Ok(Json(entry))
}
