//! Generative-AI adapter: prompt building and response parsing per mode.
//!
//! | Mode | Output | Parsing |
//! |------|--------|---------|
//! | translate | [`TranslationResult`] | JSON object |
//! | summarize | plain text | none |
//! | quiz | `Vec<QuizItem>` | JSON array, answers validated |
//! | grammar | [`GrammarCheck`] | JSON object |
//! | explain | plain text | none |
//!
//! Upstream failures are returned as typed errors and never retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use smartnews_core::dictionary::GLOSS_PLACEHOLDER;
use smartnews_core::error::CoreError;
use smartnews_core::prompts;
use smartnews_core::quiz::{self, QuizItem};
use smartnews_core::translation::{self, GrammarCheck, TranslationResult};

use crate::error::AdapterError;
use crate::fallback::BestEffort;

/// How long a dictionary lookup waits for its gloss before serving the
/// placeholder. Shorter than the model client's own timeout.
pub const GLOSS_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether the model should be constrained to emit JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A generative-text service: prompt in, free text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, format: OutputFormat) -> Result<String, AdapterError>;
}

/// The five learning modes plus the dictionary gloss, over one generator.
pub struct GenerativeAdapter {
    generator: Arc<dyn TextGenerator>,
}

impl GenerativeAdapter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Translate a word or phrase between English and Vietnamese.
    pub async fn translate(&self, text: &str) -> Result<TranslationResult, CoreError> {
        let raw = self
            .call("translate", &prompts::translate_prompt(text), OutputFormat::Json)
            .await?;
        translation::parse_translation(&raw, text).inspect_err(|e| {
            tracing::warn!(mode = "translate", error = %e, "Unparseable AI response");
        })
    }

    /// Learner-level summary; the article is truncated before sending.
    pub async fn summarize(&self, content: &str) -> Result<String, CoreError> {
        let raw = self
            .call("summarize", &prompts::summarize_prompt(content), OutputFormat::Text)
            .await?;
        Ok(raw.trim().to_string())
    }

    /// Comprehension quiz; the article is truncated before sending.
    pub async fn quiz(&self, content: &str) -> Result<Vec<QuizItem>, CoreError> {
        let raw = self
            .call("quiz", &prompts::quiz_prompt(content), OutputFormat::Json)
            .await?;
        quiz::parse_quiz(&raw).inspect_err(|e| {
            tracing::warn!(mode = "quiz", error = %e, "Unparseable AI response");
        })
    }

    /// Grammar check of one sentence.
    pub async fn grammar(&self, text: &str) -> Result<GrammarCheck, CoreError> {
        let raw = self
            .call("grammar", &prompts::grammar_prompt(text), OutputFormat::Json)
            .await?;
        translation::parse_grammar(&raw).inspect_err(|e| {
            tracing::warn!(mode = "grammar", error = %e, "Unparseable AI response");
        })
    }

    /// Explain a word or phrase in the sentence it appeared in.
    pub async fn explain(&self, text: &str, context: &str) -> Result<String, CoreError> {
        let raw = self
            .call("explain", &prompts::explain_prompt(text, context), OutputFormat::Text)
            .await?;
        Ok(raw.trim().to_string())
    }

    /// Short Vietnamese gloss for a dictionary headword.
    ///
    /// Best-effort: any failure, or no answer within [`GLOSS_TIMEOUT`],
    /// yields [`GLOSS_PLACEHOLDER`] so the dictionary lookup itself still
    /// succeeds.
    pub async fn gloss(&self, word: &str) -> BestEffort<String> {
        let prompt = prompts::gloss_prompt(word);
        let Ok(outcome) =
            tokio::time::timeout(GLOSS_TIMEOUT, self.call("gloss", &prompt, OutputFormat::Text)).await
        else {
            tracing::warn!(word, after = ?GLOSS_TIMEOUT, "Gloss took too long, using placeholder");
            return BestEffort::Fallback {
                value: GLOSS_PLACEHOLDER.to_string(),
                reason: format!("no gloss within {GLOSS_TIMEOUT:?}"),
            };
        };

        match outcome.map(|raw| raw.trim().to_string()) {
            Ok(gloss) if !gloss.is_empty() => BestEffort::Fresh(gloss),
            Ok(_) => BestEffort::Fallback {
                value: GLOSS_PLACEHOLDER.to_string(),
                reason: "model returned an empty gloss".to_string(),
            },
            Err(e) => {
                tracing::warn!(word, error = %e, "Gloss translation failed, using placeholder");
                BestEffort::Fallback {
                    value: GLOSS_PLACEHOLDER.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn call(
        &self,
        mode: &'static str,
        prompt: &str,
        format: OutputFormat,
    ) -> Result<String, CoreError> {
        tracing::debug!(mode, prompt_chars = prompt.chars().count(), "Calling generative model");
        self.generator
            .generate(prompt, format)
            .await
            .map_err(|e| {
                tracing::error!(mode, error = %e, "Generative model call failed");
                CoreError::from(e)
            })
    }
}
