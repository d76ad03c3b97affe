use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{DateTimeMcpError, DateTimeMcpResult};

/// Initialize logging
///
/// `RUST_LOG` takes precedence when set; otherwise development runs log at
/// `debug` and everything else at `info`. Output goes to stderr.
pub fn init_logging(verbose: bool) -> DateTimeMcpResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(verbose);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| DateTimeMcpError::LoggingInitialization(e.to_string()))?;

    Ok(())
}
