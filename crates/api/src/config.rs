use smartnews_adapters::gemini::GeminiConfig;
use smartnews_adapters::guardian::GuardianConfig;
use smartnews_adapters::huggingface::HuggingFaceConfig;
use smartnews_adapters::libretranslate::LibreTranslateConfig;
use smartnews_adapters::merriam_webster::MerriamWebsterConfig;

/// Whole-request timeout when `REQUEST_TIMEOUT_SECS` is unset.
///
/// Longer than the slowest single upstream call (generative, 60 s) and
/// than a dictionary lookup with its bounded gloss, so those report their
/// own typed timeouts first.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;

const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Upstream API
/// keys have no default; a service without its key answers with an
/// "not configured" upstream error instead of preventing startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: [`DEFAULT_REQUEST_TIMEOUT_SECS`]).
    pub request_timeout_secs: u64,
    /// Largest accepted request body in bytes (default: 50 MiB).
    pub max_body_bytes: usize,
    /// SQLite database URL for the flashcard store.
    pub database_url: String,
    /// Endpoints and credentials of the external services.
    pub upstream: UpstreamConfig,
}

/// Per-service settings for the external collaborators.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub gemini: GeminiConfig,
    pub guardian: GuardianConfig,
    pub merriam_webster: MerriamWebsterConfig,
    pub hugging_face: HuggingFaceConfig,
    pub libre_translate: LibreTranslateConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                            |
    /// |------------------------|------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                          |
    /// | `PORT`                 | `5000`                             |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`            |
    /// | `REQUEST_TIMEOUT_SECS` | `90`                               |
    /// | `MAX_BODY_BYTES`       | `52428800`                         |
    /// | `DATABASE_URL`         | `sqlite://smartnews.db?mode=rwc`   |
    ///
    /// See [`UpstreamConfig::from_env`] for the external services.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .map(|v| v.parse().expect("REQUEST_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let max_body_bytes: usize = std::env::var("MAX_BODY_BYTES")
            .unwrap_or_else(|_| "52428800".into())
            .parse()
            .expect("MAX_BODY_BYTES must be a valid usize");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://smartnews.db?mode=rwc".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_body_bytes,
            database_url,
            upstream: UpstreamConfig::from_env(),
        }
    }

    /// The body limit in its largest whole unit, e.g. `50MB`, `64KB` or
    /// `1000 bytes`.
    pub fn max_body_label(&self) -> String {
        let bytes = self.max_body_bytes;
        if bytes >= MIB && bytes % MIB == 0 {
            format!("{}MB", bytes / MIB)
        } else if bytes >= KIB && bytes % KIB == 0 {
            format!("{}KB", bytes / KIB)
        } else {
            format!("{bytes} bytes")
        }
    }
}

impl UpstreamConfig {
    /// | Env Var               | Default                                                   |
    /// |-----------------------|-----------------------------------------------------------|
    /// | `GEMINI_API_KEY`      | none                                                      |
    /// | `GEMINI_MODEL`        | `gemini-2.0-flash`                                        |
    /// | `GEMINI_BASE_URL`     | `https://generativelanguage.googleapis.com/v1beta`        |
    /// | `NEWS_API_KEY`        | none                                                      |
    /// | `GUARDIAN_BASE_URL`   | `https://content.guardianapis.com`                        |
    /// | `MW_API_KEY`          | none                                                      |
    /// | `MW_BASE_URL`         | `https://www.dictionaryapi.com/api/v3/references/learners/json` |
    /// | `HF_TOKEN`            | none                                                      |
    /// | `HF_TTS_URL`          | FastSpeech2 LJSpeech model on the hosted inference API    |
    /// | `LIBRE_TRANSLATE_URL` | `https://libretranslate.com/translate`                    |
    pub fn from_env() -> Self {
        Self {
            gemini: GeminiConfig {
                api_key: optional_var("GEMINI_API_KEY"),
                model: var_or("GEMINI_MODEL", "gemini-2.0-flash"),
                base_url: var_or(
                    "GEMINI_BASE_URL",
                    "https://generativelanguage.googleapis.com/v1beta",
                ),
            },
            guardian: GuardianConfig {
                api_key: optional_var("NEWS_API_KEY"),
                base_url: var_or("GUARDIAN_BASE_URL", "https://content.guardianapis.com"),
            },
            merriam_webster: MerriamWebsterConfig {
                api_key: optional_var("MW_API_KEY"),
                base_url: var_or(
                    "MW_BASE_URL",
                    "https://www.dictionaryapi.com/api/v3/references/learners/json",
                ),
            },
            hugging_face: HuggingFaceConfig {
                token: optional_var("HF_TOKEN"),
                model_url: var_or(
                    "HF_TTS_URL",
                    "https://api-inference.huggingface.co/models/espnet/kan-bayashi_ljspeech_fastspeech2_raw",
                ),
            },
            libre_translate: LibreTranslateConfig {
                translate_url: var_or("LIBRE_TRANSLATE_URL", "https://libretranslate.com/translate"),
            },
        }
    }
}

/// A variable that may be absent; blank counts as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn var_or(name: &str, default: &str) -> String {
    optional_var(name).unwrap_or_else(|| default.to_string())
}
