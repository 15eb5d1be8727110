//! Shared harness for the HTTP integration tests.
//!
//! Builds the real router over an in-memory SQLite store and stub
//! collaborators, so no test touches the network.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use smartnews_adapters::dictionary::{DictionarySource, HeadwordEntry};
use smartnews_adapters::error::AdapterError;
use smartnews_adapters::generative::{OutputFormat, TextGenerator};
use smartnews_adapters::news::ArticleSource;
use smartnews_adapters::speech::{Audio, SpeechSynthesizer};
use smartnews_adapters::translate::{MachineTranslator, TranslateRequest};
use smartnews_api::config::{ServerConfig, UpstreamConfig};
use smartnews_api::router::build_app_router;
use smartnews_api::state::{AppState, Collaborators};
use smartnews_core::article::{Article, ArticlePage, ArticleQuery};
use smartnews_core::language::{DetectedLanguage, Language};
use smartnews_db::DbPool;
use tower::ServiceExt;

/// Body limit used by the test app, small enough to exceed cheaply.
pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_body_bytes: TEST_BODY_LIMIT,
        database_url: "sqlite::memory:".to_string(),
        upstream: UpstreamConfig::from_env(),
    }
}

/// A fresh in-memory store with migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = smartnews_db::create_memory_pool().await.unwrap();
    smartnews_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application router over `pool` and `stubs`.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(pool: DbPool, stubs: &Stubs) -> Router {
    build_test_app_with_config(pool, stubs, test_config())
}

/// Like [`build_test_app`], with a caller-tuned configuration.
pub fn build_test_app_with_config(pool: DbPool, stubs: &Stubs, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone(), stubs.collaborators());
    build_app_router(state, &config)
}

/// App over a fresh store with every collaborator answering.
pub async fn online_app() -> Router {
    build_test_app(test_pool().await, &Stubs::online())
}

/// App over a fresh store with every collaborator failing.
pub async fn offline_app() -> Router {
    build_test_app(test_pool().await, &Stubs::offline())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Stub collaborators
// ---------------------------------------------------------------------------

/// One stub per collaborator; fields are public so tests can swap one out.
#[derive(Clone)]
pub struct Stubs {
    pub generator: Arc<StubGenerator>,
    pub articles: Arc<StubArticles>,
    pub dictionary: Arc<StubDictionary>,
    pub speech: Arc<StubSpeech>,
    pub translator: Arc<StubTranslator>,
}

impl Stubs {
    pub fn online() -> Self {
        Self {
            generator: StubGenerator::replying("ok"),
            articles: Arc::new(StubArticles { online: true }),
            dictionary: Arc::new(StubDictionary {
                entry: Some(HeadwordEntry {
                    headword: "run".into(),
                    ipa: Some("ˈrʌn".into()),
                    part_of_speech: Some("verb".into()),
                    short_defs: vec!["to move with your legs at a speed faster than walking".into()],
                }),
            }),
            speech: Arc::new(StubSpeech { online: true }),
            translator: Arc::new(StubTranslator::Online),
        }
    }

    pub fn offline() -> Self {
        Self {
            generator: StubGenerator::failing(),
            articles: Arc::new(StubArticles { online: false }),
            dictionary: Arc::new(StubDictionary { entry: None }),
            speech: Arc::new(StubSpeech { online: false }),
            translator: Arc::new(StubTranslator::TimingOut),
        }
    }

    pub fn with_generator(self, generator: Arc<StubGenerator>) -> Self {
        Self { generator, ..self }
    }

    pub fn with_translator(self, translator: StubTranslator) -> Self {
        Self {
            translator: Arc::new(translator),
            ..self
        }
    }

    fn collaborators(&self) -> Collaborators {
        Collaborators {
            generator: self.generator.clone(),
            articles: self.articles.clone(),
            dictionary: self.dictionary.clone(),
            speech: self.speech.clone(),
            translator: self.translator.clone(),
        }
    }
}

fn timeout(service: &'static str) -> AdapterError {
    AdapterError::Timeout { service }
}

/// Replies with a fixed text (or times out) and records every prompt.
pub struct StubGenerator {
    reply: Option<String>,
    delay: Duration,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            delay: Duration::ZERO,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            delay: Duration::ZERO,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Waits as long as the real model client would, then times out.
    pub fn hanging() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            delay: smartnews_adapters::gemini::REQUEST_TIMEOUT,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str, _: OutputFormat) -> Result<String, AdapterError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.reply.clone().ok_or_else(|| timeout("Gemini"))
    }
}

pub struct StubArticles {
    online: bool,
}

/// A recognizable article for page assertions.
pub fn sample_article(query: &ArticleQuery) -> Article {
    Article {
        id: format!("world/story-{}", query.page),
        title: query.search_term().unwrap_or("Top story").to_string(),
        content: "<p>Body</p>".into(),
        summary: "Trail".into(),
        url: "https://www.theguardian.com/world/story".into(),
        url_to_image: smartnews_core::article::PLACEHOLDER_IMAGE_URL.into(),
        published_at: None,
        source: "The Guardian".into(),
        author: "Unknown".into(),
    }
}

#[async_trait]
impl ArticleSource for StubArticles {
    async fn fetch_page(&self, query: &ArticleQuery) -> Result<ArticlePage, AdapterError> {
        if !self.online {
            return Err(AdapterError::Status {
                service: "The Guardian",
                status: 503,
                body: "Service Unavailable".into(),
            });
        }
        Ok(ArticlePage {
            total_results: 100,
            articles: vec![sample_article(query)],
            page: query.page,
        })
    }
}

pub struct StubDictionary {
    entry: Option<HeadwordEntry>,
}

#[async_trait]
impl DictionarySource for StubDictionary {
    async fn lookup(&self, _: &str) -> Result<Option<HeadwordEntry>, AdapterError> {
        Ok(self.entry.clone())
    }
}

pub struct StubSpeech {
    online: bool,
}

#[async_trait]
impl SpeechSynthesizer for StubSpeech {
    async fn synthesize(&self, _: &str) -> Result<Audio, AdapterError> {
        if !self.online {
            return Err(timeout("Hugging Face"));
        }
        Ok(Audio {
            bytes: b"RIFF".to_vec(),
            format: "wav".into(),
        })
    }
}

pub enum StubTranslator {
    Online,
    TimingOut,
    /// Up, but answers every call with this HTTP status.
    Rejecting(u16),
}

impl StubTranslator {
    fn check(&self) -> Result<(), AdapterError> {
        match self {
            StubTranslator::Online => Ok(()),
            StubTranslator::TimingOut => Err(timeout("LibreTranslate")),
            StubTranslator::Rejecting(status) => Err(AdapterError::Status {
                service: "LibreTranslate",
                status: *status,
                body: "{\"error\":\"rejected\"}".into(),
            }),
        }
    }
}

#[async_trait]
impl MachineTranslator for StubTranslator {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, AdapterError> {
        self.check()?;
        Ok(format!("{}:{}", request.target, request.text))
    }

    async fn languages(&self) -> Result<Vec<Language>, AdapterError> {
        self.check()?;
        Ok(vec![
            Language {
                code: "en".into(),
                name: "English".into(),
            },
            Language {
                code: "vi".into(),
                name: "Vietnamese".into(),
            },
        ])
    }

    async fn detect(&self, _: &str) -> Result<Vec<DetectedLanguage>, AdapterError> {
        self.check()?;
        Ok(vec![
            DetectedLanguage {
                language: "fr".into(),
                confidence: 90.0,
            },
            DetectedLanguage {
                language: "en".into(),
                confidence: 10.0,
            },
        ])
    }
}
