use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;

use crate::core::utils::{self, FALLBACK_TIMEZONE};

/// Capability check deciding whether a timezone identifier can be used for formatting
pub trait TimezoneProbe: Send + Sync {
    fn is_supported(&self, candidate: &str) -> bool;
}

/// Probe backed by the chrono-tz IANA database
///
/// A candidate is supported when it parses and the current instant can be
/// rendered with its zone label. Names are matched exactly; aliases are only
/// accepted when the database itself carries them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzProbe;

impl TimezoneProbe for ChronoTzProbe {
    fn is_supported(&self, candidate: &str) -> bool {
        match Tz::from_str(candidate) {
            Ok(tz) => !Utc::now().with_timezone(&tz).format("%Z").to_string().is_empty(),
            Err(_) => false,
        }
    }
}

/// Picks the effective timezone for a single tool call
#[derive(Clone)]
pub struct TimezoneResolver {
    default_timezone: Option<String>,
    probe: Arc<dyn TimezoneProbe>,
}

impl TimezoneResolver {
    pub fn new(default_timezone: Option<String>) -> Self {
        Self::with_probe(default_timezone, Arc::new(ChronoTzProbe))
    }

    pub fn with_probe(default_timezone: Option<String>, probe: Arc<dyn TimezoneProbe>) -> Self {
        let default_timezone = utils::normalize_timezone(default_timezone.as_deref())
            .map(str::to_string);

        if let Some(tz) = &default_timezone {
            if !probe.is_supported(tz) {
                tracing::warn!(
                    "Configured default timezone '{}' is not supported, falling back to {}",
                    tz,
                    FALLBACK_TIMEZONE
                );
            }
        }

        Self {
            default_timezone,
            probe,
        }
    }

    pub fn is_valid(&self, timezone: &str) -> bool {
        self.probe.is_supported(timezone)
    }

    /// Resolve the timezone to use, first match wins:
    /// the requested name (unvalidated), the configured default if valid,
    /// then [`FALLBACK_TIMEZONE`].
    pub fn resolve(&self, requested: Option<&str>) -> String {
        if let Some(tz) = utils::normalize_timezone(requested) {
            return tz.to_string();
        }

        match &self.default_timezone {
            Some(tz) if self.is_valid(tz) => tz.clone(),
            _ => FALLBACK_TIMEZONE.to_string(),
        }
    }
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self::new(None)
    }
}
