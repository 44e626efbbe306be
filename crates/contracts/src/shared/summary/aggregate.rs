use super::range::{parse_issued_date, SummaryWindow};
use crate::shared::record::Record;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which record fields feed a department's summary strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryFields {
    pub date_field: &'static str,
    pub issued_field: &'static str,
    pub received_field: &'static str,
    /// None derives the loss as `issued - received` (never below zero).
    pub loss_field: Option<&'static str>,
    /// Further weight fields totalled alongside, e.g. scrap or dust.
    pub extra_fields: &'static [&'static str],
}

impl Default for SummaryFields {
    fn default() -> Self {
        Self {
            date_field: "issuedDate",
            issued_field: "issuedWeight",
            received_field: "receivedWeight",
            loss_field: Some("lossWeight"),
            extra_fields: &[],
        }
    }
}

pub const LOSS_METRIC: &str = "totalLossWeight";

/// `issuedWeight` -> `totalIssuedWeight`
pub fn metric_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!("total{}{}", first.to_uppercase(), chars.as_str()),
        None => "total".to_string(),
    }
}

/// Share of `part` in `whole` with two decimals, `"0"` when `whole` is zero.
pub fn percentage(part: f64, whole: f64) -> String {
    if whole == 0.0 || !whole.is_finite() {
        return "0".to_string();
    }
    format!("{:.2}", part / whole * 100.0)
}

/// Records inside a window plus how many had no usable timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedRecords<'a> {
    pub matched: Vec<&'a Record>,
    pub unparsable: usize,
}

/// Keeps records whose `date_field` lies in `window` (inclusive).
/// Missing or unparsable timestamps never match and are counted.
pub fn filter_by_window<'a>(
    records: &'a [Record],
    window: &SummaryWindow,
    date_field: &str,
    offset: FixedOffset,
) -> WindowedRecords<'a> {
    let mut matched = Vec::new();
    let mut unparsable = 0;
    for record in records {
        match record
            .get(date_field)
            .and_then(|value| parse_issued_date(&value.to_string(), offset))
        {
            Some(instant) if window.contains(&instant) => matched.push(record),
            Some(_) => {}
            None => unparsable += 1,
        }
    }
    if unparsable > 0 {
        log::debug!(
            "{} of {} records have no parsable '{}'",
            unparsable,
            records.len(),
            date_field
        );
    }
    WindowedRecords {
        matched,
        unparsable,
    }
}

/// Totals for one summary strip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTotals {
    pub totals: BTreeMap<String, f64>,
    pub loss_percentage: String,
    pub received_percentage: String,
    pub record_count: usize,
}

impl SummaryTotals {
    pub fn get(&self, metric: &str) -> f64 {
        self.totals.get(metric).copied().unwrap_or(0.0)
    }

    pub fn loss(&self) -> f64 {
        self.get(LOSS_METRIC)
    }
}

/// Sums every configured field across `records` and derives the percentages.
pub fn reduce<'a, I>(records: I, fields: &SummaryFields) -> SummaryTotals
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut summed: Vec<&str> = vec![fields.issued_field, fields.received_field];
    summed.extend(fields.loss_field);
    summed.extend(fields.extra_fields.iter().copied());

    let mut totals: BTreeMap<String, f64> = summed.iter().map(|f| (metric_name(f), 0.0)).collect();
    let mut record_count = 0;
    for record in records {
        record_count += 1;
        for field in &summed {
            *totals.entry(metric_name(field)).or_insert(0.0) += record.number_or_zero(field);
        }
    }

    let total_of = |field: &str| totals.get(&metric_name(field)).copied().unwrap_or(0.0);
    let issued = total_of(fields.issued_field);
    let received = total_of(fields.received_field);
    let loss = match fields.loss_field {
        Some(field) => total_of(field),
        None => (issued - received).max(0.0),
    };
    totals.insert(LOSS_METRIC.to_string(), loss);

    SummaryTotals {
        totals,
        loss_percentage: percentage(loss, issued),
        received_percentage: percentage(received, issued),
        record_count,
    }
}
