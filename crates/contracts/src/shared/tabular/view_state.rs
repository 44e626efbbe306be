use crate::shared::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Header arrow for the active sort column.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => " ▲",
            Self::Descending => " ▼",
        }
    }
}

/// Tri-state of the "select all" checkbox for the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Derived pagination window over the filtered view.
///
/// `filtered` holds positions into the source rows, already searched and sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub filtered: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl TableView {
    pub fn total_count(&self) -> usize {
        self.filtered.len()
    }

    /// Source-row positions of the current page.
    pub fn page_indices(&self) -> &[usize] {
        &self.filtered[self.start_index..self.end_index]
    }
}

/// `max(1, ceil(len / rows_per_page))`
pub fn total_pages(len: usize, rows_per_page: usize) -> usize {
    len.div_ceil(rows_per_page.max(1)).max(1)
}

/// Interaction state of one table instance.
///
/// `rows` is the source of truth. Everything else (filtered view, page slice,
/// header checkbox state) is re-derived on demand. `selected` holds positions
/// within the filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    rows: Vec<Record>,
    search_query: String,
    order: SortOrder,
    order_by: Option<String>,
    page: usize,
    rows_per_page: usize,
    selected: BTreeSet<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl ViewState {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            rows: Vec::new(),
            search_query: String::new(),
            order: SortOrder::Descending,
            order_by: None,
            page: 1,
            rows_per_page: rows_per_page.max(1),
            selected: BTreeSet::new(),
        }
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Replaces the source rows. Search, sort and page size survive; the
    /// page falls back to 1 if it no longer exists.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        self.selected.clear();
        if self.page > self.total_pages() {
            self.page = 1;
        }
    }

    pub fn set_search_query(&mut self, text: &str) {
        self.search_query = text.to_string();
        self.page = 1;
        self.selected.clear();
    }

    /// Same column flips the direction; a new column starts descending.
    pub fn request_sort(&mut self, field: &str) {
        if self.order_by.as_deref() == Some(field) {
            self.order = self.order.toggle();
        } else {
            self.order_by = Some(field.to_string());
            self.order = SortOrder::Descending;
        }
        self.selected.clear();
    }

    /// Checks or clears every row on the visible page.
    pub fn select_all<T>(&mut self, checked: bool, visible_rows: &[T]) {
        self.selected.clear();
        if checked {
            let start = self.view().start_index;
            self.selected.extend(start..start + visible_rows.len());
        }
    }

    pub fn toggle_row(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn change_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Page size is forced to at least 1.
    pub fn change_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 1;
    }

    /// Looks up the row a delete action targets. The rows themselves are left
    /// alone; the caller deletes on the backend and reloads.
    pub fn delete_row(&self, id: &str) -> Option<&Record> {
        self.rows.iter().find(|row| row.id().as_deref() == Some(id))
    }

    /// Source positions of rows matching the search, in display order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.matches_search(&self.search_query))
            .map(|(i, _)| i)
            .collect();

        if let Some(field) = self.order_by.as_deref() {
            indices.sort_by(|&a, &b| {
                let cmp = self.rows[a].compare_by_field(&self.rows[b], field);
                if self.order.is_ascending() {
                    cmp
                } else {
                    cmp.reverse()
                }
            });
        }
        indices
    }

    pub fn filtered_rows(&self) -> Vec<&Record> {
        self.filtered_indices()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        let matching = self
            .rows
            .iter()
            .filter(|row| row.matches_search(&self.search_query))
            .count();
        total_pages(matching, self.rows_per_page)
    }

    pub fn view(&self) -> TableView {
        let filtered = self.filtered_indices();
        let len = filtered.len();
        let total_pages = total_pages(len, self.rows_per_page);
        let page = self.page.clamp(1, total_pages);
        let start_index = ((page - 1) * self.rows_per_page).min(len.saturating_sub(1));
        let end_index = (start_index + self.rows_per_page).min(len);
        TableView {
            filtered,
            page,
            total_pages,
            start_index,
            end_index,
        }
    }

    pub fn paginated_rows(&self) -> Vec<&Record> {
        let view = self.view();
        view.page_indices().iter().map(|&i| &self.rows[i]).collect()
    }

    /// Rows behind the current selection, in filtered-view order.
    pub fn selected_rows(&self) -> Vec<&Record> {
        let filtered = self.filtered_indices();
        self.selected
            .iter()
            .filter_map(|&pos| filtered.get(pos))
            .map(|&i| &self.rows[i])
            .collect()
    }

    pub fn header_check_state(&self) -> CheckState {
        let view = self.view();
        let visible = view.end_index - view.start_index;
        if visible == 0 {
            return CheckState::Unchecked;
        }
        let checked = (view.start_index..view.end_index)
            .filter(|i| self.selected.contains(i))
            .count();
        if checked == 0 {
            CheckState::Unchecked
        } else if checked == visible {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn pouch(name: &str, weight: f64) -> Record {
        Record::new()
            .with("id", name)
            .with("name", name)
            .with("issuedWeight", weight)
    }

    fn pouches(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| pouch(&format!("POUCH{}", i), i as f64))
            .collect()
    }

    #[test]
    fn test_empty_rows() {
        let state = ViewState::new(10);
        let view = state.view();
        assert!(view.filtered.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.start_index, 0);
        assert_eq!(view.end_index, 0);
        assert!(state.paginated_rows().is_empty());
        assert_eq!(state.header_check_state(), CheckState::Unchecked);
    }

    #[test]
    fn test_pagination_window() {
        let mut state = ViewState::new(10);
        state.set_rows(pouches(25));
        state.change_page(3);
        let view = state.view();
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.start_index, 20);
        assert_eq!(view.end_index, 25);
        assert_eq!(state.paginated_rows().len(), 5);
    }

    #[test]
    fn test_change_page_clamps() {
        let mut state = ViewState::new(10);
        state.set_rows(pouches(25));
        state.change_page(99);
        assert_eq!(state.page(), 3);
        state.change_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_search_resets_page_and_matches_any_case() {
        let mut state = ViewState::new(5);
        state.set_rows(pouches(20));
        state.change_page(3);
        state.set_search_query("pouch1");
        assert_eq!(state.page(), 1);
        let names: Vec<String> = state.filtered_rows().iter().map(|r| r.display("name")).collect();
        assert_eq!(
            names,
            vec!["POUCH1", "POUCH10", "POUCH11", "POUCH12", "POUCH13", "POUCH14", "POUCH15", "POUCH16", "POUCH17", "POUCH18", "POUCH19"]
        );
    }

    #[test]
    fn test_rows_per_page_resets_page() {
        let mut state = ViewState::new(5);
        state.set_rows(pouches(20));
        state.change_page(2);
        state.change_rows_per_page(4);
        assert_eq!(state.page(), 1);
        state.change_rows_per_page(0);
        assert_eq!(state.rows_per_page(), 1);
    }

    #[test]
    fn test_set_rows_keeps_valid_page_and_resets_invalid() {
        let mut state = ViewState::new(10);
        state.set_rows(pouches(30));
        state.set_search_query("pouch");
        state.change_page(2);
        state.set_rows(pouches(25));
        assert_eq!(state.page(), 2);
        assert_eq!(state.search_query(), "pouch");

        state.change_page(3);
        state.set_rows(pouches(5));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_request_sort_toggles_and_defaults_descending() {
        let mut state = ViewState::new(10);
        state.set_rows(vec![pouch("b", 2.0), pouch("a", 3.0), pouch("c", 1.0)]);

        state.request_sort("issuedWeight");
        assert_eq!(state.order(), SortOrder::Descending);
        let weights: Vec<f64> = state.filtered_rows().iter().map(|r| r.number_or_zero("issuedWeight")).collect();
        assert_eq!(weights, vec![3.0, 2.0, 1.0]);

        state.request_sort("issuedWeight");
        assert_eq!(state.order(), SortOrder::Ascending);
        let weights: Vec<f64> = state.filtered_rows().iter().map(|r| r.number_or_zero("issuedWeight")).collect();
        assert_eq!(weights, vec![1.0, 2.0, 3.0]);

        state.request_sort("name");
        assert_eq!(state.order_by(), Some("name"));
        assert_eq!(state.order(), SortOrder::Descending);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut state = ViewState::new(10);
        state.set_rows(vec![
            pouch("first", 1.0),
            pouch("second", 1.0),
            pouch("third", 2.0),
        ]);
        state.request_sort("issuedWeight");
        state.request_sort("issuedWeight");
        let names: Vec<String> = state.filtered_rows().iter().map(|r| r.display("name")).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_no_sort_preserves_insertion_order() {
        let mut state = ViewState::new(10);
        state.set_rows(vec![pouch("z", 1.0), pouch("a", 9.0)]);
        let names: Vec<String> = state.filtered_rows().iter().map(|r| r.display("name")).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_select_all_uses_page_offsets() {
        let mut state = ViewState::new(10);
        state.set_rows(pouches(25));
        state.change_page(2);
        let visible = state.paginated_rows().len();
        let rows: Vec<Record> = state.paginated_rows().into_iter().cloned().collect();
        state.select_all(true, &rows);
        assert_eq!(state.selected().len(), visible);
        assert_eq!(state.selected().iter().next(), Some(&10));
        assert_eq!(state.header_check_state(), CheckState::Checked);

        state.toggle_row(12);
        assert_eq!(state.header_check_state(), CheckState::Indeterminate);
        assert!(!state.is_selected(12));

        state.select_all(false, &rows);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_toggle_row_is_symmetric() {
        let mut state = ViewState::new(10);
        state.set_rows(pouches(3));
        state.toggle_row(1);
        state.toggle_row(2);
        state.toggle_row(1);
        assert_eq!(state.selected().iter().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(state.selected_rows()[0].display("name"), "POUCH2");
    }

    #[test]
    fn test_filter_change_clears_selection() {
        let mut state = ViewState::new(10);
        state.set_rows(pouches(5));
        state.toggle_row(0);
        state.set_search_query("pouch3");
        assert!(state.selected().is_empty());

        state.toggle_row(0);
        state.set_rows(pouches(5));
        assert!(state.selected().is_empty());

        state.toggle_row(0);
        state.request_sort("name");
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_delete_row_does_not_mutate() {
        let mut state = ViewState::new(10);
        state.set_rows(pouches(3));
        let target = state.delete_row("POUCH1").cloned();
        assert_eq!(target.map(|r| r.display("name")), Some("POUCH1".to_string()));
        assert_eq!(state.rows().len(), 3);
        assert!(state.delete_row("missing").is_none());
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(("[a-zA-Z0-9]{0,6}", 0.0f64..500.0, any::<bool>()), 0..60).prop_map(
            |items| {
                items
                    .into_iter()
                    .map(|(name, weight, flag)| {
                        Record::new()
                            .with("name", name.as_str())
                            .with("issuedWeight", weight)
                            .with("active", flag)
                    })
                    .collect()
            },
        )
    }

    proptest! {
        /// Every kept row contains the query in some field, every dropped row in none.
        #[test]
        fn search_partitions_rows(rows in arb_rows(), query in "[a-zA-Z0-9]{0,3}") {
            let mut state = ViewState::new(10);
            state.set_rows(rows.clone());
            state.set_search_query(&query);
            let kept = state.filtered_indices();
            let needle = query.to_lowercase();
            for (i, row) in rows.iter().enumerate() {
                let contains = needle.trim().is_empty()
                    || row.fields().any(|(_, v)| v.to_search_text().to_lowercase().contains(&needle));
                prop_assert_eq!(kept.contains(&i), contains);
            }
        }

        /// Pages never exceed the page size and concatenate back to the filtered view.
        #[test]
        fn pages_reassemble_filtered_rows(rows in arb_rows(), per_page in 1usize..15) {
            let mut state = ViewState::new(per_page);
            state.set_rows(rows);
            let expected = state.filtered_indices();
            let total = state.view().total_pages;
            prop_assert_eq!(total, expected.len().div_ceil(per_page).max(1));

            let mut collected = Vec::new();
            for page in 1..=total {
                state.change_page(page);
                let view = state.view();
                prop_assert!(view.page_indices().len() <= per_page);
                collected.extend_from_slice(view.page_indices());
            }
            prop_assert_eq!(collected, expected);
        }

        /// The page stays within [1, total_pages] after any operation.
        #[test]
        fn page_always_in_bounds(
            rows in arb_rows(),
            per_page in 1usize..15,
            target in 0usize..20,
            query in "[a-z]{0,2}",
        ) {
            let mut state = ViewState::new(per_page);
            state.set_rows(rows.clone());
            state.change_page(target);
            prop_assert!(state.page() >= 1 && state.page() <= state.total_pages());
            state.set_rows(rows.into_iter().take(target).collect());
            prop_assert!(state.page() >= 1 && state.page() <= state.total_pages());
            state.set_search_query(&query);
            prop_assert_eq!(state.page(), 1);
            state.change_rows_per_page(per_page + 1);
            prop_assert_eq!(state.page(), 1);
        }

        /// Select-all followed by deselect-all leaves nothing selected.
        #[test]
        fn select_all_round_trip(rows in arb_rows(), per_page in 1usize..15, page in 1usize..6) {
            let mut state = ViewState::new(per_page);
            state.set_rows(rows);
            state.change_page(page);
            let visible: Vec<Record> = state.paginated_rows().into_iter().cloned().collect();
            state.select_all(true, &visible);
            prop_assert_eq!(state.selected().len(), visible.len());
            state.select_all(false, &visible);
            prop_assert!(state.selected().is_empty());
        }
    }
}
