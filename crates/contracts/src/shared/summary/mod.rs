//! Date-range summary aggregation for the department card strips.

pub mod aggregate;
pub mod range;
pub mod selector;

pub use aggregate::{filter_by_window, reduce, SummaryFields, SummaryTotals, WindowedRecords};
pub use range::{
    parse_issued_date, resolve_window, InvalidRangeError, RangeMode, SummaryWindow,
};
pub use selector::{summarize, RangeSelector, SelectorOutcome, SummaryReport};
