use std::sync::Arc;

use smartnews_adapters::dictionary::{DictionaryAdapter, DictionarySource};
use smartnews_adapters::error::AdapterError;
use smartnews_adapters::gemini::GeminiClient;
use smartnews_adapters::generative::{GenerativeAdapter, TextGenerator};
use smartnews_adapters::guardian::GuardianClient;
use smartnews_adapters::huggingface::HuggingFaceTts;
use smartnews_adapters::libretranslate::LibreTranslateClient;
use smartnews_adapters::merriam_webster::MerriamWebsterClient;
use smartnews_adapters::news::{ArticleSource, NewsAdapter};
use smartnews_adapters::speech::{SpeechAdapter, SpeechSynthesizer};
use smartnews_adapters::translate::{MachineTranslator, TranslateAdapter};

use crate::config::{ServerConfig, UpstreamConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Every adapter is built once at startup and shared for
/// the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// Flashcard store.
    pub pool: smartnews_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub generative: Arc<GenerativeAdapter>,
    pub news: Arc<NewsAdapter>,
    pub dictionary: Arc<DictionaryAdapter>,
    pub speech: Arc<SpeechAdapter>,
    pub translate: Arc<TranslateAdapter>,
}

/// The raw external-service clients, one per collaborator.
pub struct Collaborators {
    pub generator: Arc<dyn TextGenerator>,
    pub articles: Arc<dyn ArticleSource>,
    pub dictionary: Arc<dyn DictionarySource>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub translator: Arc<dyn MachineTranslator>,
}

impl Collaborators {
    /// Build the production HTTP clients.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, AdapterError> {
        Ok(Self {
            generator: Arc::new(GeminiClient::new(config.gemini.clone())?),
            articles: Arc::new(GuardianClient::new(config.guardian.clone())?),
            dictionary: Arc::new(MerriamWebsterClient::new(config.merriam_webster.clone())?),
            speech: Arc::new(HuggingFaceTts::new(config.hugging_face.clone())?),
            translator: Arc::new(LibreTranslateClient::new(config.libre_translate.clone())?),
        })
    }
}

impl AppState {
    /// Wrap the collaborators in their adapters.
    pub fn new(pool: smartnews_db::DbPool, config: ServerConfig, clients: Collaborators) -> Self {
        let generative = Arc::new(GenerativeAdapter::new(clients.generator));
        Self {
            pool,
            config: Arc::new(config),
            news: Arc::new(NewsAdapter::new(clients.articles)),
            dictionary: Arc::new(DictionaryAdapter::new(
                clients.dictionary,
                Arc::clone(&generative),
            )),
            speech: Arc::new(SpeechAdapter::new(clients.speech)),
            translate: Arc::new(TranslateAdapter::new(clients.translator)),
            generative,
        }
    }
}
