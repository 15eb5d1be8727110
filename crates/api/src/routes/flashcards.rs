use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::flashcards;
use crate::state::AppState;

/// Flashcard routes mounted at `/flashcards`.
///
/// ```text
/// GET    /       -> list_flashcards
/// POST   /       -> create_flashcard
/// DELETE /{id}   -> delete_flashcard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(flashcards::list_flashcards).post(flashcards::create_flashcard),
        )
        .route("/{id}", delete(flashcards::delete_flashcard))
}
