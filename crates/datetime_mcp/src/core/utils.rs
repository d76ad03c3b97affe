// Constants for format strings
pub const FULL_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M:%S %p %Z";
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";
pub const TIME_FORMAT: &str = "%-I:%M:%S %p %Z";
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
pub const DAY_FORMAT: &str = "%A";

/// Timezone used when neither the caller nor the configuration supplies a usable one
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Trim a caller-supplied timezone, treating blank input as absent
///
/// # Arguments
///
/// * `value` - The raw timezone argument, if any
///
/// # Returns
///
/// The trimmed timezone, or `None` when the input is missing or whitespace-only
pub fn normalize_timezone(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|tz| !tz.is_empty())
}
