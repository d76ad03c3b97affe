use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::http::{
    auth::{AccessGuard, require_token},
    classifier,
    protocol::ProtocolHandler,
};

pub const PRODUCT_NAME: &str = "DateTime MCP Server";

/// Body returned to visitors that are not MCP clients
#[derive(Debug, Clone, Serialize)]
pub struct ServerStatus {
    pub name: &'static str,
    pub status: &'static str,
    pub mcp: String,
}

#[derive(Clone)]
pub struct AppState {
    pub guard: Arc<AccessGuard>,
    pub protocol: Arc<dyn ProtocolHandler>,
    pub base_path: String,
}

impl AppState {
    pub fn new(guard: AccessGuard, protocol: Arc<dyn ProtocolHandler>, base_path: &str) -> Self {
        Self {
            guard: Arc::new(guard),
            protocol,
            base_path: base_path.to_string(),
        }
    }

    fn status(&self) -> Response {
        Json(ServerStatus {
            name: PRODUCT_NAME,
            status: "running",
            mcp: format!(
                "Connect an MCP client to {} using the Streamable HTTP transport",
                self.base_path
            ),
        })
        .into_response()
    }
}

/// GET, POST and DELETE on the base path, all behind the access guard
pub fn router(state: AppState) -> Router {
    let path = state.base_path.clone();

    Router::new()
        .route(
            &path,
            get(handle_get).post(handle_command).delete(handle_command),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Browsers get the status payload; MCP clients are delegated, falling back
/// to the status payload if the protocol layer fails.
async fn handle_get(State(state): State<AppState>, request: Request) -> Response {
    if !classifier::is_protocol_client(request.headers()) {
        tracing::debug!("GET without MCP headers, serving status payload");
        return state.status();
    }

    match state.protocol.handle(request).await {
        Ok(response) if !response.status().is_server_error() => response,
        Ok(response) => {
            tracing::warn!(status = %response.status(), "MCP GET failed, serving status payload");
            state.status()
        }
        Err(err) => {
            tracing::warn!("MCP GET failed, serving status payload: {}", err);
            state.status()
        }
    }
}

/// POST and DELETE are always MCP traffic
async fn handle_command(State(state): State<AppState>, request: Request) -> Response {
    state.protocol.handle(request).await.into_response()
}
