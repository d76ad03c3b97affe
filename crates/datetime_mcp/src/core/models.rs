use rmcp::schemars;
use serde::{Deserialize, Deserializer};

use crate::core::{snapshot::DateTimeSnapshot, utils};

/// Helper function to deserialize an optional string, trimming it and dropping blanks
fn deserialize_optional_timezone<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(utils::normalize_timezone(value.as_deref()).map(str::to_string))
}

/// Request to get the current date and time
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetCurrentDateTimeRequest {
    /// IANA timezone name (e.g., 'America/New_York', 'Europe/London'). Defaults to the server's configured timezone
    #[serde(default, deserialize_with = "deserialize_optional_timezone")]
    pub timezone: Option<String>,
}

/// Result of a `get_current_datetime` call
#[derive(Debug, Clone)]
pub struct ToolResponse {
    pub snapshot: DateTimeSnapshot,
    /// Caller-supplied timezone that was rejected in favour of the default
    pub rejected_timezone: Option<String>,
}

impl ToolResponse {
    /// Render the markdown text block returned to the client
    pub fn render(&self) -> String {
        let s = &self.snapshot;
        let mut text = format!(
            r#"## Current Date and Time

- **Full:** {}
- **ISO 8601:** {}
- **Date:** {}
- **Time:** {}
- **Timezone:** {}
- **Day of Week:** {}
- **Unix Timestamp:** {}"#,
            s.full, s.iso, s.date, s.time, s.timezone, s.day_of_week, s.unix_timestamp
        );

        if let Some(rejected) = &self.rejected_timezone {
            text.push_str(&format!(
                "\n\n> Note: \"{}\" is not a valid IANA timezone, so the default timezone ({}) was used instead.",
                rejected, s.timezone
            ));
        }

        text
    }
}
