pub mod date_input;
pub mod pagination_controls;
pub mod range_mode_selector;
pub mod stat_card;
pub mod table;

pub use pagination_controls::PaginationControls;
pub use range_mode_selector::RangeModeSelector;
pub use stat_card::{CardTone, StatCard};
