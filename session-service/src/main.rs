use std::error::Error;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use session_service::app_state::AppState;
use session_service::services::{HashmapUserStore, TokenService};
use session_service::utils::Config;
use session_service::Application;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    // A missing or invalid secret is fatal: refuse to start.
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
    })?;
    tracing::debug!(?config, "configuration loaded");

    let token_service = Arc::new(TokenService::new(&config)?);
    let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
    let app_state = AppState::new(user_store, token_service);

    let app = Application::build(app_state, config.app_address()).await?;
    app.run().await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
