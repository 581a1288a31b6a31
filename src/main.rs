use mimalloc::MiMalloc;
use split_expense::{Config, ExpenseStorage, SplitError, router};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), SplitError> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        logger_name = %cfg.logger_name,
        loglevel = %cfg.loglevel(),
        debug_mode = cfg.debug_mode,
        "logger initialized"
    );

    let storage = match init_storage(&cfg).await {
        Ok(storage) => storage,
        Err(e) => {
            error!(database_url = %cfg.database_url, error = %e, "database initialization failed");
            return Err(e);
        }
    };

    let state = router::AppState::new(storage);
    let app = router::expense_router(state);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn init_storage(cfg: &Config) -> Result<ExpenseStorage, SplitError> {
    let storage = ExpenseStorage::connect(&cfg.database_url).await?;
    storage.init_schema().await?;
    info!(database_url = %cfg.database_url, "database initialized");
    Ok(storage)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}
