//! Dictionary adapter: curated lookup plus a best-effort Vietnamese gloss.

use std::sync::Arc;

use async_trait::async_trait;
use smartnews_core::dictionary::{self, DictionaryEntry};
use smartnews_core::error::CoreError;
use smartnews_core::text::is_blank;

use crate::error::AdapterError;
use crate::fallback::BestEffort;
use crate::generative::GenerativeAdapter;

/// The fields read from a curated dictionary's first entry for a word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadwordEntry {
    /// Headword as printed, possibly with syllable-break asterisks.
    pub headword: String,
    pub ipa: Option<String>,
    pub part_of_speech: Option<String>,
    pub short_defs: Vec<String>,
}

/// A curated English dictionary. `Ok(None)` means the word has no entry.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Option<HeadwordEntry>, AdapterError>;
}

pub struct DictionaryAdapter {
    source: Arc<dyn DictionarySource>,
    generative: Arc<GenerativeAdapter>,
}

impl DictionaryAdapter {
    pub fn new(source: Arc<dyn DictionarySource>, generative: Arc<GenerativeAdapter>) -> Self {
        Self { source, generative }
    }

    /// Look a word up, then gloss it.
    ///
    /// Only the dictionary call can fail the lookup; a failed gloss is
    /// replaced by the placeholder.
    pub async fn lookup(&self, word: &str) -> Result<DictionaryEntry, CoreError> {
        let word = word.trim();
        if is_blank(word) {
            return Err(CoreError::Validation("Word is required".to_string()));
        }

        let entry = self
            .source
            .lookup(word)
            .await
            .map_err(|e| {
                tracing::error!(word, error = %e, "Dictionary lookup failed");
                CoreError::from(e)
            })?
            .ok_or_else(|| CoreError::NotFound {
                entity: "Word",
                key: word.to_string(),
            })?;

        // Gloss the dictionary's headword, not the learner's spelling.
        let headword = dictionary::clean_headword(&entry.headword);
        let gloss = self.generative.gloss(&headword).await;
        if let BestEffort::Fallback { reason, .. } = &gloss {
            tracing::debug!(word, reason = %reason, "Serving dictionary entry without gloss");
        }

        Ok(DictionaryEntry {
            word: headword,
            phonetic: dictionary::format_phonetic(entry.ipa.as_deref()),
            vietnamese: gloss.into_value(),
            meanings: vec![dictionary::build_meaning(
                entry.part_of_speech.as_deref(),
                &entry.short_defs,
            )],
        })
    }
}
