use chrono::{DateTime, Utc};

use crate::core::{
    error::DateTimeResult,
    models::{GetCurrentDateTimeRequest, ToolResponse},
    resolver::TimezoneResolver,
    snapshot::DateTimeSnapshot,
    utils::FALLBACK_TIMEZONE,
};

/// Logic behind the `get_current_datetime` tool
///
/// An unusable timezone never fails the call: the snapshot is rendered in the
/// default timezone and the response carries a note naming the rejected input.
#[derive(Clone, Default)]
pub struct ToolInvoker {
    resolver: TimezoneResolver,
}

impl ToolInvoker {
    pub fn new(resolver: TimezoneResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &TimezoneResolver {
        &self.resolver
    }

    pub fn invoke(&self, request: GetCurrentDateTimeRequest) -> DateTimeResult<ToolResponse> {
        self.invoke_at(request, Utc::now())
    }

    pub fn invoke_at(
        &self,
        request: GetCurrentDateTimeRequest,
        instant: DateTime<Utc>,
    ) -> DateTimeResult<ToolResponse> {
        let (requested, mut rejected_timezone) = match request.timezone {
            Some(tz) if !self.resolver.is_valid(&tz) => (None, Some(tz)),
            other => (other, None),
        };

        let timezone = self.resolver.resolve(requested.as_deref());
        let snapshot = match DateTimeSnapshot::capture(&timezone, instant) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("{}; rendering in {}", err, FALLBACK_TIMEZONE);
                rejected_timezone.get_or_insert(timezone);
                DateTimeSnapshot::capture(FALLBACK_TIMEZONE, instant)?
            }
        };

        if let Some(rejected) = &rejected_timezone {
            tracing::info!(
                "Timezone '{}' rejected, substituted {}",
                rejected,
                snapshot.timezone
            );
        }

        Ok(ToolResponse {
            snapshot,
            rejected_timezone,
        })
    }
}
