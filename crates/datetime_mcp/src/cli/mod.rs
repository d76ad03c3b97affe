use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;

use crate::config::{AuthConfig, Config, Environment, ProtocolConfig};
use crate::errors::{DateTimeMcpError, DateTimeMcpResult};

/// DateTime MCP Server
///
/// Serves the `get_current_datetime` tool over streamable HTTP.
///
/// ## Development
/// ```bash
/// MCP_ENV=development cargo run --bin mcp-server-datetime
/// npx @modelcontextprotocol/inspector
/// ```
///
/// ## Configuration
/// Point your MCP client at the endpoint:
/// ```json
/// {
///   "mcpServers": {
///     "datetime": {
///       "url": "http://localhost:3000/mcp",
///       "headers": { "Authorization": "Bearer <token>" }
///     }
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `MCP_AUTH_TOKEN`: Shared secret; authentication is off when unset
/// - `DEFAULT_TIMEZONE`: IANA timezone used when a call does not name one
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-datetime")]
#[command(about = "An MCP server that tells agents the current date and time")]
#[command(version)]
pub struct Cli {
    /// Shared secret required as a Bearer token or `token` query parameter
    #[arg(long, env = "MCP_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// IANA timezone used when a call does not supply a valid one
    #[arg(long, env = "DEFAULT_TIMEZONE")]
    pub default_timezone: Option<String>,

    /// Address to listen on
    #[arg(long, env = "MCP_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Deployment environment; development enables verbose protocol logs
    #[arg(long, env = "MCP_ENV", value_enum, default_value_t = Environment::Production)]
    pub environment: Environment,

    /// Maximum seconds a single MCP request may take
    #[arg(long, env = "MCP_MAX_DURATION", default_value_t = 60)]
    pub max_duration: u64,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> DateTimeMcpResult<Config> {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> DateTimeMcpResult<Config> {
        if self.max_duration == 0 {
            return Err(DateTimeMcpError::ValidationError {
                message: "max duration must be at least one second".to_string(),
            });
        }

        let token = self.auth_token.filter(|t| !t.is_empty());
        let verbose_logs = self.environment == Environment::Development;

        Ok(Config {
            bind_address: SocketAddr::new(self.host, self.port),
            environment: self.environment,
            auth: AuthConfig { token },
            default_timezone: self.default_timezone,
            protocol: ProtocolConfig {
                verbose_logs,
                max_duration: Duration::from_secs(self.max_duration),
                ..ProtocolConfig::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["mcp-server-datetime"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_config().unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--auth-token",
            "s3cret",
            "--default-timezone",
            "Europe/Berlin",
            "--port",
            "8080",
            "--environment",
            "development",
            "--max-duration",
            "15",
        ]);

        assert_eq!(config.auth.token.as_deref(), Some("s3cret"));
        assert_eq!(config.default_timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(config.bind_address.port(), 8080);
        assert!(config.is_development());
        assert!(config.protocol.verbose_logs);
        assert!(config.protocol.disable_sse);
        assert_eq!(config.protocol.max_duration, Duration::from_secs(15));
        assert_eq!(config.protocol.base_path, "/mcp");
    }

    #[test]
    fn test_empty_token_disables_auth() {
        let config = parse(&["--auth-token", ""]);
        assert!(config.auth.token.is_none());
    }

    #[test]
    fn test_zero_max_duration_rejected() {
        let cli = Cli::try_parse_from(["mcp-server-datetime", "--max-duration", "0"]).unwrap();
        assert!(matches!(
            cli.into_config(),
            Err(DateTimeMcpError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_unknown_environment_rejected() {
        assert!(Cli::try_parse_from(["mcp-server-datetime", "--environment", "staging"]).is_err());
    }
}
