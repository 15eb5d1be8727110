//! Dictionary entry shape returned by word lookups.

use serde::{Deserialize, Serialize};

/// Gloss used when the secondary AI translation is unavailable ("not yet translated").
pub const GLOSS_PLACEHOLDER: &str = "Chưa dịch được";

/// At most this many short definitions are returned per word.
pub const MAX_DEFINITIONS: usize = 3;

/// Part of speech used when the dictionary gives none.
pub const UNKNOWN_PART_OF_SPEECH: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    /// IPA wrapped in slashes, or empty.
    pub phonetic: String,
    /// Short Vietnamese gloss, or [`GLOSS_PLACEHOLDER`].
    pub vietnamese: String,
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
}

/// Remove the syllable-break asterisks dictionaries put in headwords (`run*ning`).
pub fn clean_headword(headword: &str) -> String {
    headword.replace('*', "")
}

/// Wrap an IPA transcription in slashes; empty when there is none.
pub fn format_phonetic(ipa: Option<&str>) -> String {
    match ipa.map(str::trim).filter(|s| !s.is_empty()) {
        Some(ipa) => format!("/{ipa}/"),
        None => String::new(),
    }
}

/// Build the single meaning block from a part of speech and short definitions.
pub fn build_meaning(part_of_speech: Option<&str>, short_defs: &[String]) -> Meaning {
    Meaning {
        part_of_speech: part_of_speech
            .filter(|p| !p.is_empty())
            .unwrap_or(UNKNOWN_PART_OF_SPEECH)
            .to_string(),
        definitions: short_defs
            .iter()
            .take(MAX_DEFINITIONS)
            .map(|def| Definition {
                definition: def.clone(),
                example: None,
            })
            .collect(),
    }
}
