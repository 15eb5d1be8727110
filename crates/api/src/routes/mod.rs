pub mod ai;
pub mod articles;
pub mod dictionary;
pub mod flashcards;
pub mod health;
pub mod pronunciation;
pub mod translate;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /articles                     newest articles (?page=&q=&section=)
/// /news                         alias of /articles
///
/// /dictionary/{word}            dictionary entry with Vietnamese gloss
///
/// /flashcards                   list (GET), save (POST)
/// /flashcards/{id}              delete (DELETE)
///
/// /ai/translate                 structured word translation (POST)
/// /ai/summarize                 article summary (POST)
/// /ai/quiz                      comprehension quiz (POST)
/// /ai/grammar                   grammar check (POST)
/// /ai/explain                   explain a word in context (POST)
/// /ai/text-to-speech            audio or client-speech fallback (POST)
///
/// /translate                    machine translation (POST)
/// /translate/languages          supported languages (GET)
/// /translate/detect             language detection (POST)
///
/// /pronunciation/score          score a spoken transcript (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/articles", articles::router())
        .nest("/news", articles::router())
        .nest("/dictionary", dictionary::router())
        .nest("/flashcards", flashcards::router())
        .nest("/ai", ai::router())
        .nest("/translate", translate::router())
        .nest("/pronunciation", pronunciation::router())
}
