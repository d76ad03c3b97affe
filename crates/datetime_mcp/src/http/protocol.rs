use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::{
    Json,
    body::Body,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde_json::json;
use tower::ServiceExt;

use crate::config::ProtocolConfig;
use crate::core::resolver::TimezoneResolver;
use crate::server::DateTimeService;

/// Failures reported by the protocol layer
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("MCP request exceeded the {}s limit", .after.as_secs())]
    Timeout { after: Duration },
}

impl IntoResponse for ProtocolError {
    fn into_response(self) -> Response {
        let status = match self {
            ProtocolError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// MCP framing, sessions and tool dispatch, seen from the endpoint
#[async_trait]
pub trait ProtocolHandler: Send + Sync {
    async fn handle(&self, request: Request) -> Result<Response, ProtocolError>;
}

/// [`ProtocolHandler`] backed by rmcp's streamable HTTP transport
pub struct RmcpProtocolHandler {
    service: StreamableHttpService<DateTimeService, LocalSessionManager>,
    config: ProtocolConfig,
}

impl RmcpProtocolHandler {
    pub fn new(resolver: TimezoneResolver, config: ProtocolConfig) -> Self {
        let transport_config = StreamableHttpServerConfig {
            stateful_mode: !config.disable_sse,
            ..Default::default()
        };

        let service = StreamableHttpService::new(
            move || Ok(DateTimeService::new(resolver.clone())),
            LocalSessionManager::default().into(),
            transport_config,
        );

        Self { service, config }
    }
}

#[async_trait]
impl ProtocolHandler for RmcpProtocolHandler {
    async fn handle(&self, request: Request) -> Result<Response, ProtocolError> {
        let method = request.method().clone();
        let started = Instant::now();

        let response = tokio::time::timeout(
            self.config.max_duration,
            self.service.clone().oneshot(request),
        )
        .await
        .map_err(|_| ProtocolError::Timeout {
            after: self.config.max_duration,
        })?
        .unwrap_or_else(|never| match never {});

        let status = response.status();
        let elapsed = started.elapsed();
        if self.config.verbose_logs {
            tracing::info!(%method, %status, ?elapsed, "MCP request handled");
        } else {
            tracing::debug!(%method, %status, ?elapsed, "MCP request handled");
        }

        Ok(response.map(Body::new))
    }
}
