//! Client-side tabular view engine: search, sort, paginate and select over
//! an in-memory record set.

pub mod view_state;

pub use view_state::{CheckState, SortOrder, TableView, ViewState, DEFAULT_ROWS_PER_PAGE};
