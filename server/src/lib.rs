//! HTTP service exposing an in-memory todo list and a message echo log.
//!
//! # Design
//! Both collections live in one [`Store`] behind a `tokio` `RwLock`, shared
//! through axum state. Handlers validate their payloads, take the lock for
//! the whole read-modify-write, and return `Result<_, ApiError>`; errors are
//! rendered as `{"error": ...}` at the boundary.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::{ConfigError, LogFormat, ServerConfig};
pub use error::ApiError;
pub use models::{MessageRecord, Todo};
pub use store::{Db, Store};

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub environment: String,
}

impl AppState {
    pub fn new(store: Store, environment: impl Into<String>) -> Self {
        Self {
            db: store.into_shared(),
            environment: environment.into(),
        }
    }
}

/// Router over an empty store with default settings.
pub fn app() -> Router {
    let config = ServerConfig::default();
    router(AppState::new(Store::new(), &config.environment), &config)
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/api/message", post(handlers::send_message))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route("/api/todos/{id}", delete(handlers::delete_todo))
        .route("/api/messages", get(handlers::list_messages))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(CatchPanicLayer::custom(error::handle_panic));

    if let Some(cors) = cors_layer(&config.cors_origins) {
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return Some(layer.allow_origin(Any));
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    Some(layer.allow_origin(AllowOrigin::list(allowed)))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serves `router` until Ctrl+C or SIGTERM, then drains in-flight requests.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
