//! Repository for the `flashcards` table.

use chrono::Utc;
use smartnews_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::flashcard::{CreateFlashcard, Flashcard};

/// Column list for `flashcards` queries.
const COLUMNS: &str = "id, front, back, example, created_at";

/// Provides create, list, and delete for flashcards. Cards are never updated.
pub struct FlashcardRepo;

impl FlashcardRepo {
    /// Insert a new card stamped with the current time.
    ///
    /// A `front` that already exists fails with a unique-constraint
    /// violation (see [`crate::is_unique_violation`]).
    pub async fn create(pool: &SqlitePool, input: &CreateFlashcard) -> Result<Flashcard, sqlx::Error> {
        let query = format!(
            "INSERT INTO flashcards (front, back, example, created_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(&input.front)
            .bind(&input.back)
            .bind(input.example.as_deref())
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a card by exact, case-sensitive `front`.
    pub async fn find_by_front(pool: &SqlitePool, front: &str) -> Result<Option<Flashcard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcards WHERE front = ?");
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(front)
            .fetch_optional(pool)
            .await
    }

    /// All cards, most recently saved first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Flashcard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcards ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Flashcard>(&query).fetch_all(pool).await
    }

    /// Delete a card. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flashcards WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of stored cards.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM flashcards")
            .fetch_one(pool)
            .await
    }
}
