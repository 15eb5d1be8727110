//! General-purpose machine translation, independent of the generative model.
//!
//! Translation itself is a hard dependency. Language listing and detection
//! degrade to a static list and a diacritics heuristic.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use smartnews_core::error::CoreError;
use smartnews_core::language::{self, DetectedLanguage, Language};
use smartnews_core::text::is_blank;

use crate::error::AdapterError;
use crate::fallback::BestEffort;

pub const DEFAULT_SOURCE: &str = "en";
pub const DEFAULT_TARGET: &str = "vi";
pub const DEFAULT_FORMAT: &str = "text";

/// One machine-translation request with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub source: String,
    pub target: String,
    /// `text` or `html`.
    pub format: String,
}

impl TranslateRequest {
    /// English to Vietnamese plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: DEFAULT_SOURCE.to_string(),
            target: DEFAULT_TARGET.to_string(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineTranslation {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[async_trait]
pub trait MachineTranslator: Send + Sync {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, AdapterError>;
    async fn languages(&self) -> Result<Vec<Language>, AdapterError>;
    async fn detect(&self, text: &str) -> Result<Vec<DetectedLanguage>, AdapterError>;
}

pub struct TranslateAdapter {
    translator: Arc<dyn MachineTranslator>,
}

impl TranslateAdapter {
    pub fn new(translator: Arc<dyn MachineTranslator>) -> Self {
        Self { translator }
    }

    pub async fn translate(&self, request: &TranslateRequest) -> Result<MachineTranslation, CoreError> {
        if is_blank(&request.text) {
            return Err(CoreError::Validation("Text is required".to_string()));
        }

        let translated = self.translator.translate(request).await.map_err(|e| {
            tracing::error!(from_lang = %request.source, to_lang = %request.target, error = %e, "Machine translation failed");
            CoreError::from(e)
        })?;

        Ok(MachineTranslation {
            original_text: request.text.clone(),
            translated_text: translated,
            source_lang: request.source.clone(),
            target_lang: request.target.clone(),
        })
    }

    /// Supported languages, or the static list when the service is down.
    pub async fn languages(&self) -> BestEffort<Vec<Language>> {
        match self.translator.languages().await {
            Ok(languages) if !languages.is_empty() => BestEffort::Fresh(languages),
            Ok(_) => BestEffort::Fallback {
                value: language::fallback_languages(),
                reason: "service listed no languages".to_string(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Language listing failed, using static list");
                BestEffort::Fallback {
                    value: language::fallback_languages(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Candidate languages, most likely first.
    ///
    /// When the service fails or detects nothing, the heuristic's single
    /// guess is returned instead.
    pub async fn detect(&self, text: &str) -> Result<BestEffort<Vec<DetectedLanguage>>, CoreError> {
        if is_blank(text) {
            return Err(CoreError::Validation("Text is required".to_string()));
        }

        let outcome = match self.translator.detect(text).await {
            Ok(detections) if !detections.is_empty() => BestEffort::Fresh(detections),
            Ok(_) => BestEffort::Fallback {
                value: vec![language::detect_heuristic(text)],
                reason: "service detected no language".to_string(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Language detection failed, using heuristic");
                BestEffort::Fallback {
                    value: vec![language::detect_heuristic(text)],
                    reason: e.to_string(),
                }
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use smartnews_core::language::HEURISTIC_CONFIDENCE;

    use super::*;

    struct EchoTranslator;

    #[async_trait]
    impl MachineTranslator for EchoTranslator {
        async fn translate(&self, request: &TranslateRequest) -> Result<String, AdapterError> {
            Ok(format!("[{}] {}", request.target, request.text))
        }

        async fn languages(&self) -> Result<Vec<Language>, AdapterError> {
            Ok(vec![Language {
                code: "en".into(),
                name: "English".into(),
            }])
        }

        async fn detect(&self, _: &str) -> Result<Vec<DetectedLanguage>, AdapterError> {
            Ok(Vec::new())
        }
    }

    struct OfflineTranslator;

    #[async_trait]
    impl MachineTranslator for OfflineTranslator {
        async fn translate(&self, _: &TranslateRequest) -> Result<String, AdapterError> {
            Err(AdapterError::Timeout {
                service: "LibreTranslate",
            })
        }

        async fn languages(&self) -> Result<Vec<Language>, AdapterError> {
            Err(AdapterError::Timeout {
                service: "LibreTranslate",
            })
        }

        async fn detect(&self, _: &str) -> Result<Vec<DetectedLanguage>, AdapterError> {
            Err(AdapterError::Timeout {
                service: "LibreTranslate",
            })
        }
    }

    #[tokio::test]
    async fn translation_echoes_request_languages() {
        let adapter = TranslateAdapter::new(Arc::new(EchoTranslator));
        let result = adapter.translate(&TranslateRequest::new("hello")).await.unwrap();
        assert_eq!(result.original_text, "hello");
        assert_eq!(result.translated_text, "[vi] hello");
        assert_eq!(result.source_lang, "en");
        assert_eq!(result.target_lang, "vi");
    }

    #[tokio::test]
    async fn blank_text_is_rejected_before_calling_out() {
        let adapter = TranslateAdapter::new(Arc::new(OfflineTranslator));
        assert_matches!(
            adapter.translate(&TranslateRequest::new(" ")).await,
            Err(CoreError::Validation(_))
        );
    }

    #[tokio::test]
    async fn translation_outage_is_an_error() {
        let adapter = TranslateAdapter::new(Arc::new(OfflineTranslator));
        assert_matches!(
            adapter.translate(&TranslateRequest::new("hello")).await,
            Err(CoreError::UpstreamTimeout(_))
        );
    }

    #[tokio::test]
    async fn languages_fall_back_to_static_list() {
        let adapter = TranslateAdapter::new(Arc::new(OfflineTranslator));
        let languages = adapter.languages().await;
        assert!(languages.is_fallback());
        assert_eq!(languages.into_value(), language::fallback_languages());
    }

    #[tokio::test]
    async fn detection_falls_back_to_heuristic() {
        let adapter = TranslateAdapter::new(Arc::new(OfflineTranslator));
        let detected = adapter.detect("Tôi đi học").await.unwrap();
        assert!(detected.is_fallback());
        assert_eq!(
            detected.into_value(),
            vec![DetectedLanguage {
                language: "vi".into(),
                confidence: HEURISTIC_CONFIDENCE,
            }]
        );
    }

    #[tokio::test]
    async fn empty_detection_uses_heuristic() {
        let adapter = TranslateAdapter::new(Arc::new(EchoTranslator));
        let detected = adapter.detect("good morning").await.unwrap();
        assert!(detected.is_fallback());
        assert_eq!(detected.value()[0].language, "en");
    }
}
