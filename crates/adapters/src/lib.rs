//! Adapters for the external services the reader depends on.
//!
//! Each collaborator sits behind an object-safe trait so the API layer can
//! hold one instance per process and tests can swap in stubs:
//!
//! | Trait | Production client | Adapter |
//! |-------|-------------------|---------|
//! | [`generative::TextGenerator`] | [`gemini::GeminiClient`] | [`generative::GenerativeAdapter`] |
//! | [`news::ArticleSource`] | [`guardian::GuardianClient`] | [`news::NewsAdapter`] |
//! | [`dictionary::DictionarySource`] | [`merriam_webster::MerriamWebsterClient`] | [`dictionary::DictionaryAdapter`] |
//! | [`speech::SpeechSynthesizer`] | [`huggingface::HuggingFaceTts`] | [`speech::SpeechAdapter`] |
//! | [`translate::MachineTranslator`] | [`libretranslate::LibreTranslateClient`] | [`translate::TranslateAdapter`] |

pub mod dictionary;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod generative;
pub mod guardian;
pub mod huggingface;
pub mod libretranslate;
pub mod merriam_webster;
pub mod news;
pub mod speech;
pub mod translate;

mod http;
