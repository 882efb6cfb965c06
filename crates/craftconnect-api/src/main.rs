//! CraftConnect API server entry point.

use std::sync::Arc;

use craftconnect_api::build_app;
use craftconnect_api::config::AppConfig;
use craftconnect_api::error::AppError;
use craftconnect_api::state::AppState;
use craftconnect_catalog::Catalog;
use craftconnect_catalog::script::MessageScript;
use craftconnect_core::clock::SystemClock;
use craftconnect_core::notify::TracingNotifier;
use craftconnect_core::rng::SystemRng;
use craftconnect_hearts::application::runner::GameRunner;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting CraftConnect API server");

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr()?;

    // Build application state.
    let clock = Arc::new(SystemClock);
    let hearts = GameRunner::new(
        MessageScript::default(),
        config.game.clone(),
        Box::new(SystemRng::from_entropy()),
        clock.clone(),
    );
    let app_state = AppState::new(
        Arc::new(Catalog::sample()),
        hearts,
        clock,
        Arc::new(TracingNotifier),
    );
    let hearts = Arc::clone(&app_state.hearts);

    let app = build_app(app_state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await?;

    hearts.stop();
    tracing::info!("CraftConnect API server stopped");

    Ok(())
}
