use super::aggregate::{filter_by_window, reduce, SummaryFields, SummaryTotals};
use super::range::{resolve_window, InvalidRangeError, RangeMode, SummaryWindow};
use crate::shared::record::Record;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// What the range selector currently allows the strip to show.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorOutcome {
    Ready(SummaryWindow),
    /// Custom mode with a bound still missing.
    Pending,
    Invalid(InvalidRangeError),
}

/// Day / Week / Month / Custom selector.
///
/// Custom bounds are remembered across mode switches but only shape the
/// window while the mode is `Custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSelector {
    mode: RangeMode,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
}

impl RangeSelector {
    pub fn new(mode: RangeMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    pub fn custom_start(&self) -> Option<NaiveDate> {
        self.custom_start
    }

    pub fn custom_end(&self) -> Option<NaiveDate> {
        self.custom_end
    }

    /// Whether the two custom date inputs are shown.
    pub fn shows_custom_inputs(&self) -> bool {
        self.mode == RangeMode::Custom
    }

    pub fn select(&mut self, mode: RangeMode) {
        self.mode = mode;
    }

    pub fn set_custom_start(&mut self, date: Option<NaiveDate>) {
        self.custom_start = date;
    }

    pub fn set_custom_end(&mut self, date: Option<NaiveDate>) {
        self.custom_end = date;
    }

    pub fn outcome(&self, now: DateTime<Utc>, offset: FixedOffset) -> SelectorOutcome {
        match resolve_window(self.mode, now, self.custom_start, self.custom_end, offset) {
            Ok(Some(window)) => SelectorOutcome::Ready(window),
            Ok(None) => SelectorOutcome::Pending,
            Err(err) => SelectorOutcome::Invalid(err),
        }
    }
}

/// Totals for one resolved window.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub window: SummaryWindow,
    pub totals: SummaryTotals,
    pub unparsable: usize,
}

/// Filters and reduces in one step. Pending and invalid selections yield
/// None: the strip is cleared rather than left showing stale totals.
pub fn summarize(
    records: &[Record],
    fields: &SummaryFields,
    outcome: &SelectorOutcome,
    offset: FixedOffset,
) -> Option<SummaryReport> {
    let SelectorOutcome::Ready(window) = outcome else {
        return None;
    };
    let windowed = filter_by_window(records, window, fields.date_field, offset);
    Some(SummaryReport {
        window: *window,
        totals: reduce(windowed.matched, fields),
        unparsable: windowed.unparsable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-04-15T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_custom_mode_waits_for_both_bounds() {
        let mut selector = RangeSelector::default();
        assert_eq!(selector.mode(), RangeMode::Day);
        selector.select(RangeMode::Custom);
        assert!(selector.shows_custom_inputs());
        assert_eq!(selector.outcome(now(), utc()), SelectorOutcome::Pending);

        selector.set_custom_start(Some(date(2025, 4, 1)));
        assert_eq!(selector.outcome(now(), utc()), SelectorOutcome::Pending);

        selector.set_custom_end(Some(date(2025, 4, 3)));
        assert!(matches!(selector.outcome(now(), utc()), SelectorOutcome::Ready(_)));
    }

    #[test]
    fn test_invalid_custom_range_is_reported() {
        let mut selector = RangeSelector::new(RangeMode::Custom);
        selector.set_custom_start(Some(date(2025, 4, 10)));
        selector.set_custom_end(Some(date(2025, 4, 5)));
        assert!(matches!(selector.outcome(now(), utc()), SelectorOutcome::Invalid(_)));
        assert!(summarize(&[], &SummaryFields::default(), &selector.outcome(now(), utc()), utc()).is_none());
    }

    #[test]
    fn test_leaving_custom_discards_bounds_effect() {
        let mut selector = RangeSelector::new(RangeMode::Custom);
        selector.set_custom_start(Some(date(2025, 4, 10)));
        selector.set_custom_end(Some(date(2025, 4, 5)));
        selector.select(RangeMode::Month);
        assert!(!selector.shows_custom_inputs());
        assert_eq!(selector.custom_start(), Some(date(2025, 4, 10)));

        let SelectorOutcome::Ready(window) = selector.outcome(now(), utc()) else {
            panic!("month mode must resolve");
        };
        assert_eq!(window.start.date_naive(), date(2025, 4, 1));
    }

    #[test]
    fn test_summarize_reports_window_and_unparsable() {
        let records = vec![
            Record::new()
                .with("issuedDate", "2025-04-15T08:00:00Z")
                .with("issuedWeight", 20.0)
                .with("receivedWeight", 19.5)
                .with("lossWeight", 0.5),
            Record::new().with("issuedDate", "").with("issuedWeight", 99.0),
        ];
        let selector = RangeSelector::new(RangeMode::Day);
        let report = summarize(&records, &SummaryFields::default(), &selector.outcome(now(), utc()), utc())
            .unwrap();
        assert_eq!(report.unparsable, 1);
        assert_eq!(report.totals.get("totalIssuedWeight"), 20.0);
        assert_eq!(report.totals.loss_percentage, "2.50");
        assert_eq!(report.totals.received_percentage, "97.50");
    }

    #[test]
    fn test_day_outcome_follows_the_clock_past_midnight() {
        let selector = RangeSelector::default();
        let before = DateTime::parse_from_rfc3339("2025-04-15T23:59:00Z").unwrap().with_timezone(&Utc);
        let after = DateTime::parse_from_rfc3339("2025-04-16T00:01:00Z").unwrap().with_timezone(&Utc);

        let SelectorOutcome::Ready(old) = selector.outcome(before, utc()) else {
            panic!("day mode always resolves");
        };
        let SelectorOutcome::Ready(new) = selector.outcome(after, utc()) else {
            panic!("day mode always resolves");
        };
        assert_eq!(old.start.date_naive(), date(2025, 4, 15));
        assert_eq!(new.start.date_naive(), date(2025, 4, 16));
    }
}
