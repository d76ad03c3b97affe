use std::net::SocketAddr;
use std::time::Duration;

use clap::ValueEnum;

/// Default route the MCP endpoint is mounted on
pub const DEFAULT_BASE_PATH: &str = "/mcp";

/// Default upper bound for a single delegated protocol request
pub const DEFAULT_MAX_DURATION: Duration = Duration::from_secs(60);

/// Deployment environment, controls log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

/// Shared-secret authentication settings
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// When `None`, authentication is disabled
    pub token: Option<String>,
}

/// Settings handed to the protocol framing layer
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    pub base_path: String,
    pub verbose_logs: bool,
    pub max_duration: Duration,
    /// Serve each call as plain request/response instead of a stateful SSE session
    pub disable_sse: bool,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            verbose_logs: false,
            max_duration: DEFAULT_MAX_DURATION,
            disable_sse: true,
        }
    }
}

/// Configuration derived from CLI arguments and environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub environment: Environment,
    pub auth: AuthConfig,
    pub default_timezone: Option<String>,
    pub protocol: ProtocolConfig,
}

impl Config {
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
