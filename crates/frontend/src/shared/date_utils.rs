//! Date formatting for table cells and the summary strip.

use chrono::{DateTime, FixedOffset};
use contracts::shared::summary::{parse_issued_date, SummaryWindow};

/// Format a record timestamp as DD-MM-YYYY HH:MM in the dashboard offset.
/// Example: "2025-04-15T08:30:00Z" at +05:30 -> "15-04-2025 14:00"
pub fn format_datetime(text: &str, offset: FixedOffset) -> String {
    match parse_issued_date(text, offset) {
        Some(instant) => instant
            .with_timezone(&offset)
            .format("%d-%m-%Y %H:%M")
            .to_string(),
        None => text.to_string(),
    }
}

pub fn format_date(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%d-%m-%Y").to_string()
}

/// "01-04-2025 – 15-04-2025", or a single date for one-day windows.
pub fn format_window(window: &SummaryWindow) -> String {
    let start = format_date(&window.start);
    let end = format_date(&window.end);
    if start == end {
        start
    } else {
        format!("{} – {}", start, end)
    }
}
