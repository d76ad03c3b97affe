use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::core::{
    error::{DateTimeError, DateTimeResult},
    utils::{DATE_FORMAT, DAY_FORMAT, FULL_FORMAT, ISO_FORMAT, TIME_FORMAT},
};

/// Every representation of a single instant in a single timezone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeSnapshot {
    /// Weekday, date and 12-hour time with zone label
    pub full: String,
    /// ISO 8601 instant in UTC with millisecond precision
    pub iso: String,
    /// Weekday and date only
    pub date: String,
    /// 12-hour time with zone label
    pub time: String,
    /// IANA timezone name the snapshot was rendered in
    pub timezone: String,
    /// Day of the week
    pub day_of_week: String,
    /// Whole seconds since the Unix epoch
    pub unix_timestamp: i64,
}

impl DateTimeSnapshot {
    /// Render `instant` in `timezone`
    ///
    /// All fields derive from the same instant so they can never disagree.
    pub fn capture(timezone: &str, instant: DateTime<Utc>) -> DateTimeResult<Self> {
        let tz = Tz::from_str(timezone).map_err(|_| DateTimeError::InvalidTimezone {
            timezone: timezone.to_string(),
        })?;
        let local = instant.with_timezone(&tz);

        Ok(Self {
            full: local.format(FULL_FORMAT).to_string(),
            iso: instant.format(ISO_FORMAT).to_string(),
            date: local.format(DATE_FORMAT).to_string(),
            time: local.format(TIME_FORMAT).to_string(),
            timezone: timezone.to_string(),
            day_of_week: local.format(DAY_FORMAT).to_string(),
            unix_timestamp: instant.timestamp_millis().div_euclid(1000),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_capture_new_york() {
        let snapshot =
            DateTimeSnapshot::capture("America/New_York", instant("2026-10-19T19:04:05.123Z"))
                .unwrap();

        assert_eq!(snapshot.full, "Monday, October 19, 2026 at 3:04:05 PM EDT");
        assert_eq!(snapshot.date, "Monday, October 19, 2026");
        assert_eq!(snapshot.time, "3:04:05 PM EDT");
        assert_eq!(snapshot.iso, "2026-10-19T19:04:05.123Z");
        assert_eq!(snapshot.timezone, "America/New_York");
        assert_eq!(snapshot.day_of_week, "Monday");
        assert_eq!(snapshot.unix_timestamp, 1_792_436_645);
    }

    #[test]
    fn test_capture_crosses_date_line() {
        let snapshot =
            DateTimeSnapshot::capture("Asia/Tokyo", instant("2026-10-19T19:04:05.123Z")).unwrap();

        assert_eq!(snapshot.date, "Tuesday, October 20, 2026");
        assert_eq!(snapshot.time, "4:04:05 AM JST");
        assert_eq!(snapshot.day_of_week, "Tuesday");
        // The absolute instant does not depend on the zone
        assert_eq!(snapshot.iso, "2026-10-19T19:04:05.123Z");
        assert_eq!(snapshot.unix_timestamp, 1_792_436_645);
    }

    #[test]
    fn test_unix_timestamp_floors_milliseconds() {
        let snapshot =
            DateTimeSnapshot::capture("UTC", instant("1969-12-31T23:59:59.500Z")).unwrap();
        assert_eq!(snapshot.unix_timestamp, -1);

        let snapshot = DateTimeSnapshot::capture("Europe/London", Utc::now()).unwrap();
        let millis = DateTime::parse_from_rfc3339(&snapshot.iso)
            .unwrap()
            .timestamp_millis();
        assert_eq!(snapshot.unix_timestamp, millis.div_euclid(1000));
    }

    #[test]
    fn test_capture_invalid_timezone() {
        let result = DateTimeSnapshot::capture("Not/AZone", Utc::now());
        assert!(matches!(
            result,
            Err(DateTimeError::InvalidTimezone { timezone }) if timezone == "Not/AZone"
        ));
    }
}
