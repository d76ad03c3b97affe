use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::config::AuthConfig;
use crate::http::endpoint::AppState;

/// Query parameter accepted as an alternative to the Authorization header
pub const TOKEN_QUERY_PARAM: &str = "token";

const BEARER_SCHEME: &str = "Bearer";

/// Shared-secret gate in front of every MCP verb
#[derive(Debug, Clone, Default)]
pub struct AccessGuard {
    token: Option<String>,
}

impl AccessGuard {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            token: config.token.clone().filter(|t| !t.is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Check the Bearer header, then the `token` query parameter
    pub fn authorize(&self, headers: &HeaderMap, query: Option<&str>) -> bool {
        let Some(expected) = self.token.as_deref() else {
            return true;
        };

        let header_ok = bearer_token(headers)
            .is_some_and(|token| constant_time_eq(token.as_bytes(), expected.as_bytes()));
        let query_ok = query
            .and_then(query_token)
            .is_some_and(|token| constant_time_eq(token.as_bytes(), expected.as_bytes()));

        header_ok | query_ok
    }
}

/// Token of a `Bearer` credential; the scheme name is case-insensitive
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case(BEARER_SCHEME)
        .then_some(token)
}

fn query_token(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Compare without exiting at the first differing byte.
/// Only the length is observable.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response()
}

/// Middleware rejecting requests that fail the [`AccessGuard`]
pub async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.guard.authorize(request.headers(), request.uri().query()) {
        next.run(request).await
    } else {
        tracing::warn!(
            method = %request.method(),
            "Rejected unauthorized MCP request"
        );
        unauthorized()
    }
}
