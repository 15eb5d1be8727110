//! Flashcard model and DTOs.

use serde::{Deserialize, Serialize};
use smartnews_core::translation::TranslationResult;
use smartnews_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `flashcards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Serialized as `_id`, the key the reader's card list uses.
    #[serde(rename = "_id")]
    pub id: DbId,
    pub front: String,
    pub back: String,
    pub example: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for saving a new card. Missing sides deserialize as empty and are
/// rejected by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFlashcard {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
    pub example: Option<String>,
}

impl From<&TranslationResult> for CreateFlashcard {
    fn from(result: &TranslationResult) -> Self {
        Self {
            front: result.original.clone(),
            back: result.translated.clone(),
            example: Some(result.example.clone()),
        }
    }
}
