use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named date-window choice of the summary strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    #[default]
    #[serde(alias = "today")]
    Day,
    Week,
    Month,
    Custom,
}

impl RangeMode {
    pub const ALL: [RangeMode; 4] = [Self::Day, Self::Week, Self::Month, Self::Custom];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Today",
            Self::Week => "Last 7 days",
            Self::Month => "This month",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "today" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "custom" => Ok(Self::Custom),
            other => Err(format!("Unknown range mode: {}", other)),
        }
    }
}

/// Custom range that cannot be turned into a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRangeError {
    #[error("End date {end} is before start date {start}")]
    Reversed { start: NaiveDate, end: NaiveDate },
    #[error("Date {0} is outside the supported calendar range")]
    OutOfRange(NaiveDate),
}

/// Inclusive `[start, end]` instant pair in the configured offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl SummaryWindow {
    /// Window covering whole calendar days `from..=to` in `offset`.
    pub fn for_days(
        from: NaiveDate,
        to: NaiveDate,
        offset: FixedOffset,
    ) -> Result<Self, InvalidRangeError> {
        Ok(Self {
            start: start_of_day(from, offset).ok_or(InvalidRangeError::OutOfRange(from))?,
            end: end_of_day(to, offset).ok_or(InvalidRangeError::OutOfRange(to))?,
        })
    }

    pub fn contains(&self, instant: &DateTime<FixedOffset>) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// `(startDate, endDate)` as `YYYY-MM-DD` for windowed endpoints.
    pub fn query_dates(&self) -> (String, String) {
        (
            self.start.date_naive().format("%Y-%m-%d").to_string(),
            self.end.date_naive().format("%Y-%m-%d").to_string(),
        )
    }
}

/// None when the instant falls outside chrono's representable range.
fn at_local(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let local = date.and_time(time);
    let utc = local.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
    Some(offset.from_utc_datetime(&utc))
}

/// Midnight of `date` in `offset`.
pub fn start_of_day(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    at_local(date, NaiveTime::MIN, offset)
}

/// 23:59:59.999 of `date` in `offset`.
pub fn end_of_day(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    start_of_day(date, offset)?
        .checked_add_signed(Duration::days(1))?
        .checked_sub_signed(Duration::milliseconds(1))
}

/// Resolves a range mode into a concrete window.
///
/// `Ok(None)` means a custom range is still missing a bound and nothing
/// should be aggregated yet. Custom bounds are ignored for every other mode.
pub fn resolve_window(
    mode: RangeMode,
    now: DateTime<Utc>,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
    offset: FixedOffset,
) -> Result<Option<SummaryWindow>, InvalidRangeError> {
    let today = now.with_timezone(&offset).date_naive();
    let window = match mode {
        RangeMode::Day => SummaryWindow::for_days(today, today, offset)?,
        RangeMode::Week => {
            let first = today
                .checked_sub_signed(Duration::days(7))
                .ok_or(InvalidRangeError::OutOfRange(today))?;
            SummaryWindow::for_days(first, today, offset)?
        }
        RangeMode::Month => {
            let first = today.with_day(1).ok_or(InvalidRangeError::OutOfRange(today))?;
            SummaryWindow::for_days(first, today, offset)?
        }
        RangeMode::Custom => {
            let (Some(start), Some(end)) = (custom_start, custom_end) else {
                return Ok(None);
            };
            if end < start {
                return Err(InvalidRangeError::Reversed { start, end });
            }
            SummaryWindow::for_days(start, end, offset)?
        }
    };
    Ok(Some(window))
}

/// Parses a record timestamp.
///
/// RFC 3339 strings carry their own offset. Offset-less date-times and bare
/// dates are read as local time in `offset`. Anything else is None.
pub fn parse_issued_date(text: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant);
    }
    // CRM exports write the offset without a colon: `+0000`, `+0530`
    for format in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"] {
        if let Ok(instant) = DateTime::parse_from_str(text, format) {
            return Some(instant);
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return at_local(naive.date(), naive.time(), offset);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| start_of_day(date, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instant(text: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_month_window() {
        let window = resolve_window(RangeMode::Month, instant("2025-04-15T10:00:00Z"), None, None, utc())
            .unwrap()
            .unwrap();
        assert_eq!(window.start.to_rfc3339(), "2025-04-01T00:00:00+00:00");
        assert_eq!(
            window.end.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            "2025-04-15T23:59:59.999"
        );
    }

    #[test]
    fn test_day_window_uses_configured_offset() {
        // 20:00 UTC is already the next day in +05:30.
        let window = resolve_window(RangeMode::Day, instant("2025-04-15T20:00:00Z"), None, None, ist())
            .unwrap()
            .unwrap();
        assert_eq!(window.start.to_rfc3339(), "2025-04-16T00:00:00+05:30");
        assert_eq!(window.query_dates(), ("2025-04-16".to_string(), "2025-04-16".to_string()));
    }

    #[test]
    fn test_week_window_starts_seven_days_back() {
        let window = resolve_window(RangeMode::Week, instant("2025-03-03T08:00:00Z"), None, None, utc())
            .unwrap()
            .unwrap();
        assert_eq!(window.start.date_naive(), date(2025, 2, 24));
        assert_eq!(window.end.date_naive(), date(2025, 3, 3));
    }

    #[test]
    fn test_custom_window() {
        let now = instant("2025-04-15T10:00:00Z");
        let window = resolve_window(RangeMode::Custom, now, Some(date(2025, 4, 5)), Some(date(2025, 4, 10)), utc())
            .unwrap()
            .unwrap();
        assert_eq!(window.query_dates(), ("2025-04-05".to_string(), "2025-04-10".to_string()));

        assert_eq!(
            resolve_window(RangeMode::Custom, now, Some(date(2025, 4, 5)), None, utc()),
            Ok(None)
        );
    }

    #[test]
    fn test_custom_window_rejects_reversed_range() {
        let err = resolve_window(
            RangeMode::Custom,
            instant("2025-04-15T10:00:00Z"),
            Some(date(2025, 4, 10)),
            Some(date(2025, 4, 5)),
            utc(),
        )
        .unwrap_err();
        assert_eq!(err, InvalidRangeError::Reversed { start: date(2025, 4, 10), end: date(2025, 4, 5) });
        assert_eq!(err.to_string(), "End date 2025-04-05 is before start date 2025-04-10");
    }

    #[test]
    fn test_custom_bounds_ignored_outside_custom_mode() {
        let now = instant("2025-04-15T10:00:00Z");
        let with_bounds = resolve_window(RangeMode::Day, now, Some(date(2025, 4, 10)), Some(date(2025, 4, 5)), utc());
        let without = resolve_window(RangeMode::Day, now, None, None, utc());
        assert_eq!(with_bounds, without);
    }

    #[test]
    fn test_parse_issued_date_formats() {
        let parsed = parse_issued_date("2025-04-15T10:00:00.000Z", ist()).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), instant("2025-04-15T10:00:00Z"));

        let naive = parse_issued_date("2025-04-15T10:00:00", ist()).unwrap();
        assert_eq!(naive.with_timezone(&Utc), instant("2025-04-15T04:30:00Z"));

        let bare = parse_issued_date("2025-04-15", utc()).unwrap();
        assert_eq!(bare.to_rfc3339(), "2025-04-15T00:00:00+00:00");

        assert!(parse_issued_date("", utc()).is_none());
        assert!(parse_issued_date("15/04/2025", utc()).is_none());
    }

    #[test]
    fn test_parse_offset_without_colon() {
        let zulu = parse_issued_date("2025-04-15T10:00:00.000+0000", ist()).unwrap();
        assert_eq!(zulu.with_timezone(&Utc), instant("2025-04-15T10:00:00Z"));

        let india = parse_issued_date("2025-04-15T10:00:00.000+0530", utc()).unwrap();
        assert_eq!(india.with_timezone(&Utc), instant("2025-04-15T04:30:00Z"));
        assert_eq!(india.offset().local_minus_utc(), 5 * 3600 + 30 * 60);

        let no_millis = parse_issued_date("2025-04-15T10:00:00+0000", utc()).unwrap();
        assert_eq!(no_millis.with_timezone(&Utc), instant("2025-04-15T10:00:00Z"));
    }

    #[test]
    fn test_custom_window_out_of_calendar_range_is_an_error() {
        let err = resolve_window(
            RangeMode::Custom,
            instant("2025-04-15T10:00:00Z"),
            Some(date(2025, 1, 1)),
            Some(NaiveDate::MAX),
            utc(),
        )
        .unwrap_err();
        assert_eq!(err, InvalidRangeError::OutOfRange(NaiveDate::MAX));

        assert!(end_of_day(NaiveDate::MAX, utc()).is_none());
        assert!(start_of_day(NaiveDate::MIN, ist()).is_none());
    }

    #[test]
    fn test_range_mode_parsing() {
        assert_eq!("today".parse::<RangeMode>(), Ok(RangeMode::Day));
        assert_eq!("Month".parse::<RangeMode>(), Ok(RangeMode::Month));
        assert!("year".parse::<RangeMode>().is_err());
        let mode: RangeMode = serde_json::from_str("\"today\"").unwrap();
        assert_eq!(mode, RangeMode::Day);
    }
}
