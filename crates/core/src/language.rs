//! Supported-language list and best-effort language detection.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Confidence reported by the heuristic detector.
pub const HEURISTIC_CONFIDENCE: f64 = 0.5;

/// Language assumed when no Vietnamese diacritics are present.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Vietnamese letters with tone marks or modified vowels.
static VIETNAMESE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(?i)[àáạảãâầấậẩẫăằắặẳẵèéẹẻẽêềếệểễìíịỉĩòóọỏõôồốộổỗơờớợởỡùúụủũưừứựửữỳýỵỷỹđ]",
    )
    .expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub confidence: f64,
}

/// Static list served when the translation service cannot list its own.
pub fn fallback_languages() -> Vec<Language> {
    [
        ("en", "English"),
        ("vi", "Vietnamese"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("zh", "Chinese"),
    ]
    .into_iter()
    .map(|(code, name)| Language {
        code: code.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Vietnamese if any Vietnamese diacritic appears, otherwise [`DEFAULT_LANGUAGE`].
pub fn detect_heuristic(text: &str) -> DetectedLanguage {
    let language = if VIETNAMESE_RE.is_match(text) {
        "vi"
    } else {
        DEFAULT_LANGUAGE
    };
    DetectedLanguage {
        language: language.to_string(),
        confidence: HEURISTIC_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vietnamese_diacritics_detect_vietnamese() {
        assert_eq!(detect_heuristic("Tôi đi học").language, "vi");
        assert_eq!(detect_heuristic("ĐƯỜNG").language, "vi");
    }

    #[test]
    fn plain_ascii_defaults_to_english() {
        let detected = detect_heuristic("The quick brown fox");
        assert_eq!(detected.language, "en");
        assert_eq!(detected.confidence, HEURISTIC_CONFIDENCE);
    }

    #[test]
    fn fallback_list_contains_english_and_vietnamese() {
        let codes: Vec<String> = fallback_languages().into_iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), 8);
        assert!(codes.contains(&"en".to_string()));
        assert!(codes.contains(&"vi".to_string()));
    }
}
