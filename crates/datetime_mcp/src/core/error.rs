use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

// Error codes
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";

/// Errors raised while computing a date/time snapshot
#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
}

impl From<DateTimeError> for McpError {
    fn from(err: DateTimeError) -> Self {
        match err {
            DateTimeError::InvalidTimezone { timezone } => McpError::invalid_params(
                ERROR_INVALID_TIMEZONE,
                Some(json!({"timezone": timezone})),
            ),
        }
    }
}

pub type DateTimeResult<T> = Result<T, DateTimeError>;
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::DateTimeError;
    use crate::core::error::McpError;

    #[test]
    fn test_error_conversion() {
        let error = DateTimeError::InvalidTimezone {
            timezone: "Invalid/Zone".to_string(),
        };
        let mcp_error: McpError = error.into();

        assert!(mcp_error.to_string().contains("invalid_timezone"));
    }

    #[test]
    fn test_error_display_names_timezone() {
        let error = DateTimeError::InvalidTimezone {
            timezone: "Mars/Olympus".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid timezone: Mars/Olympus");
    }
}
