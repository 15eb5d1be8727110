//! Flashcard input rules.
//!
//! Cards are write-once: there is no update path, so everything a card
//! must satisfy is checked here before the insert.

use crate::error::CoreError;
use crate::text::is_blank;

/// Message returned when a card with the same front already exists.
pub const DUPLICATE_FRONT_MESSAGE: &str = "Từ vựng này đã có trong bộ nhớ của bạn rồi!";

/// Validate the required sides of a new card.
///
/// Text is stored verbatim; this only rejects missing or blank sides.
pub fn validate_new_flashcard(front: &str, back: &str) -> Result<(), CoreError> {
    if is_blank(front) || is_blank(back) {
        return Err(CoreError::Validation(
            "Thiếu mặt trước hoặc mặt sau".to_string(),
        ));
    }
    Ok(())
}

/// Treat a blank optional example as absent.
pub fn normalize_example(example: Option<&str>) -> Option<&str> {
    example.filter(|e| !is_blank(e))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn both_sides_present_is_valid() {
        assert!(validate_new_flashcard("run", "chạy").is_ok());
    }

    #[test]
    fn empty_front_is_rejected() {
        assert_matches!(
            validate_new_flashcard("", "chạy"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn blank_back_is_rejected() {
        assert_matches!(
            validate_new_flashcard("run", "   "),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn blank_example_becomes_none() {
        assert_eq!(normalize_example(Some("  ")), None);
        assert_eq!(normalize_example(Some("I run.")), Some("I run."));
        assert_eq!(normalize_example(None), None);
    }
}
