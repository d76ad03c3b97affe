use axum::http::{HeaderMap, header::ACCEPT};

/// Header carrying the MCP session id once a client has initialized
pub const SESSION_ID_HEADER: &str = "mcp-session-id";

const EVENT_STREAM: &str = "text/event-stream";

/// Whether the request comes from an MCP client rather than a casual visit
///
/// Protocol clients either carry a session id or accept a streaming response.
pub fn is_protocol_client(headers: &HeaderMap) -> bool {
    headers.contains_key(SESSION_ID_HEADER)
        || headers.get_all(ACCEPT).iter().any(|value| {
            value
                .to_str()
                .map(|accept| accept.to_ascii_lowercase().contains(EVENT_STREAM))
                .unwrap_or(false)
        })
}
