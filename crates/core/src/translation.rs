//! Structured results of the AI translate and grammar modes.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::structured::extract_structured;

/// Bilingual dictionary-style translation of a word or phrase.
///
/// This is the shape saved into a flashcard (`front = original`,
/// `back = translated`, `example = example`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    /// Part of speech (Noun, Verb, ...).
    #[serde(rename = "type", default)]
    pub word_type: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
}

/// Outcome of a grammar check on one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarCheck {
    pub is_correct: bool,
    /// Corrected sentence; empty when the input was already correct.
    #[serde(default)]
    pub corrected: String,
    #[serde(default)]
    pub explanation: String,
}

/// Parse translate-mode output.
///
/// `original` is forced back to the text we sent; models sometimes echo
/// it with altered casing or punctuation.
pub fn parse_translation(raw: &str, original: &str) -> Result<TranslationResult, CoreError> {
    let mut result: TranslationResult = extract_structured(raw)?;
    if result.translated.trim().is_empty() {
        return Err(CoreError::MalformedAiResponse(
            "translation is missing the translated text".to_string(),
        ));
    }
    result.original = original.to_string();
    Ok(result)
}

/// Parse grammar-mode output.
pub fn parse_grammar(raw: &str) -> Result<GrammarCheck, CoreError> {
    let mut check: GrammarCheck = extract_structured(raw)?;
    if check.is_correct {
        check.corrected.clear();
    }
    Ok(check)
}
