//! Scoring of a spoken transcript against the sentence the learner read.
//!
//! Uses bigram Sørensen–Dice similarity on lower-cased, trimmed text,
//! scaled to an integer 0-100.

use serde::Serialize;

use crate::error::CoreError;
use crate::text::is_blank;

/// Scores at or above this are [`Grade::Good`].
pub const GOOD_THRESHOLD: u8 = 80;

/// Scores at or above this (and below [`GOOD_THRESHOLD`]) are [`Grade::Fair`].
pub const FAIR_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PronunciationScore {
    pub score: u8,
    pub grade: Grade,
}

impl Grade {
    pub fn for_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            Grade::Good
        } else if score >= FAIR_THRESHOLD {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }
}

/// Compare what the learner said with what they were asked to say.
pub fn score_pronunciation(transcript: &str, target: &str) -> Result<PronunciationScore, CoreError> {
    if is_blank(transcript) || is_blank(target) {
        return Err(CoreError::Validation(
            "transcript and target must not be empty".to_string(),
        ));
    }

    let spoken = transcript.trim().to_lowercase();
    let expected = target.trim().to_lowercase();
    let similarity = strsim::sorensen_dice(&spoken, &expected);
    let score = (similarity * 100.0).round().clamp(0.0, 100.0) as u8;

    Ok(PronunciationScore {
        score,
        grade: Grade::for_score(score),
    })
}
