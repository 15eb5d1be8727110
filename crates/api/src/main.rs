use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use smartnews_api::config::ServerConfig;
use smartnews_api::router::build_app_router;
use smartnews_api::state::{AppState, Collaborators};
use smartnews_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "smartnews_api=debug,smartnews_adapters=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        max_body_bytes = config.max_body_bytes,
        "SmartNews configuration loaded",
    );
    warn_missing_keys(&config);

    let pool = open_flashcard_store(&config.database_url).await;

    let clients = Collaborators::from_config(&config.upstream)
        .expect("Failed to build external service clients");
    let state = AppState::new(pool.clone(), config.clone(), clients);
    let app = build_app_router(state, &config);

    let host: IpAddr = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot listen on {addr}: {e}"));
    tracing::info!(%addr, "SmartNews API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server terminated with an error");

    pool.close().await;
    tracing::info!("Flashcard store closed, bye");
}

/// Human-readable logs filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the SQLite file, prove it answers, and bring the schema up to date.
async fn open_flashcard_store(database_url: &str) -> DbPool {
    let pool = smartnews_db::create_pool(database_url)
        .await
        .expect("Failed to open flashcard database");
    smartnews_db::health_check(&pool)
        .await
        .expect("Flashcard database does not answer");
    smartnews_db::run_migrations(&pool)
        .await
        .expect("Flashcard migrations failed");
    tracing::info!(database_url, "Flashcard store ready");
    pool
}

/// Log which external services will answer "not configured".
fn warn_missing_keys(config: &ServerConfig) {
    let upstream = &config.upstream;
    let missing = [
        ("GEMINI_API_KEY", upstream.gemini.api_key.is_none()),
        ("NEWS_API_KEY", upstream.guardian.api_key.is_none()),
        ("MW_API_KEY", upstream.merriam_webster.api_key.is_none()),
    ];
    for (setting, is_missing) in missing {
        if is_missing {
            tracing::warn!(setting, "API key not set; dependent routes will fail");
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
///
/// Requests still in flight finish; their upstream calls are cancelled only
/// if the client disconnects first.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down, draining open requests");
}
