//! Vouch Auth API entrypoint

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vouch_auth_api::config::Config;
use vouch_auth_api::state::{AppState, AuthServiceImpl};
use vouch_auth_core::{AuthService, TokenCodec};
use vouch_axum::AuthGate;
use vouch_db::PgUserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Vouch Auth API");

    let config = Config::from_env()?;
    let http_port = config.http_port;

    let pool = vouch_db::create_pool(&config.database_url).await?;
    let repo = Arc::new(PgUserRepository::new(pool.clone()));

    // One codec instance backs both the service and the request gate
    let codec = Arc::new(TokenCodec::new(&config.auth));
    let auth: AuthServiceImpl = AuthService::new(Arc::clone(&codec), repo);
    let gate = AuthGate::new(codec);

    let state = AppState::new(auth, gate, config).with_pool(pool);
    let app = vouch_auth_api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
