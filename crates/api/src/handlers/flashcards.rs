//! Handlers for the saved-vocabulary flashcards.
//!
//! Cards are create/list/delete only; editing is delete-and-recreate.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use smartnews_core::error::CoreError;
use smartnews_core::flashcard::{normalize_example, validate_new_flashcard, DUPLICATE_FRONT_MESSAGE};
use smartnews_core::types::DbId;
use smartnews_db::models::flashcard::{CreateFlashcard, Flashcard};
use smartnews_db::repositories::FlashcardRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/flashcards
///
/// Save a card. 400 when a side is missing or the front is already saved.
pub async fn create_flashcard(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateFlashcard>,
) -> AppResult<impl IntoResponse> {
    validate_new_flashcard(&input.front, &input.back)?;

    if FlashcardRepo::find_by_front(&state.pool, &input.front)
        .await?
        .is_some()
    {
        return Err(duplicate_front());
    }

    let input = CreateFlashcard {
        example: normalize_example(input.example.as_deref()).map(str::to_string),
        ..input
    };

    // The unique constraint settles concurrent saves of the same front.
    let card = FlashcardRepo::create(&state.pool, &input)
        .await
        .map_err(|e| {
            if smartnews_db::is_unique_violation(&e) {
                duplicate_front()
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(card_id = card.id, front = %card.front, "Flashcard saved");

    Ok((StatusCode::CREATED, Json(DataResponse::new(card))))
}

/// GET /api/flashcards
///
/// All cards, newest first, as a bare array.
pub async fn list_flashcards(State(state): State<AppState>) -> AppResult<Json<Vec<Flashcard>>> {
    let cards = FlashcardRepo::list(&state.pool).await?;
    Ok(Json(cards))
}

/// DELETE /api/flashcards/{id}
///
/// 204 on success, 404 when no card has this id.
pub async fn delete_flashcard(
    State(state): State<AppState>,
    ApiPath(card_id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FlashcardRepo::delete(&state.pool, card_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Flashcard",
            key: card_id.to_string(),
        }));
    }

    tracing::info!(card_id, "Flashcard deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn duplicate_front() -> AppError {
    AppError::Core(CoreError::Duplicate(DUPLICATE_FRONT_MESSAGE.to_string()))
}
