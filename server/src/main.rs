use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_echo_server::{router, AppState, LogFormat, ServerConfig, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ServerConfig::from_env()?;
    init_tracing(&config.log_format)?;

    let store = if config.seed_sample_data {
        Store::with_sample_todos()
    } else {
        Store::new()
    };
    let state = AppState::new(store, &config.environment);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        environment = %config.environment,
        cors_origins = ?config.cors_origins,
        "Server listening"
    );

    todo_echo_server::serve(listener, router(state, &config)).await?;
    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(format: &LogFormat) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .try_init()?,
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
    }
    Ok(())
}
