pub mod auth;
pub mod classifier;
pub mod endpoint;
pub mod protocol;

use std::sync::Arc;

use crate::config::Config;
use crate::core::resolver::TimezoneResolver;
use crate::errors::{DateTimeMcpError, DateTimeMcpResult};

use auth::AccessGuard;
use endpoint::AppState;
use protocol::RmcpProtocolHandler;

pub async fn run(config: Config) -> DateTimeMcpResult<()> {
    let resolver = TimezoneResolver::new(config.default_timezone.clone());
    tracing::info!("Default timezone resolves to {}", resolver.resolve(None));

    let guard = AccessGuard::new(&config.auth);
    if !guard.is_enabled() {
        tracing::warn!("MCP_AUTH_TOKEN is not set, the endpoint is open to everyone");
    }

    let protocol = Arc::new(RmcpProtocolHandler::new(resolver, config.protocol.clone()));
    let app = endpoint::router(AppState::new(guard, protocol, &config.protocol.base_path));

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|source| DateTimeMcpError::Bind {
            address: config.bind_address,
            source,
        })?;

    tracing::info!(
        "DateTime MCP server listening on http://{}{}",
        config.bind_address,
        config.protocol.base_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
