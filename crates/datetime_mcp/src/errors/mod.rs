/// Result type for startup and serving operations
pub type DateTimeMcpResult<T> = Result<T, DateTimeMcpError>;

/// Process-level errors
#[derive(thiserror::Error, Debug)]
pub enum DateTimeMcpError {
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Configuration validation failed: {message}")]
    ValidationError { message: String },
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
