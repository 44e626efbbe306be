//! Reactive wrapper around `ViewState`.
//!
//! One `TableController` per table instance. Source rows are pushed in by
//! the page; every interaction goes through the controller so derived
//! memos (page slice, header checkbox) stay in sync.

use contracts::shared::record::Record;
use contracts::shared::tabular::{CheckState, SortOrder, TableView, ViewState};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TableController {
    state: RwSignal<ViewState>,
    pub view: Memo<TableView>,
    /// Current page as (position in filtered view, row).
    pub page_rows: Memo<Vec<(usize, Record)>>,
    pub check_state: Memo<CheckState>,
}

/// Creates the controller and keeps it fed from `rows`.
pub fn use_table_view(rows: Signal<Vec<Record>>, rows_per_page: usize) -> TableController {
    let state = RwSignal::new(ViewState::new(rows_per_page));

    Effect::new(move |_| {
        let rows = rows.get();
        state.update(|s| s.set_rows(rows));
    });

    let view = Memo::new(move |_| state.with(|s| s.view()));
    let page_rows = Memo::new(move |_| {
        let view = view.get();
        state.with(|s| {
            view.page_indices()
                .iter()
                .enumerate()
                .map(|(offset, &source)| (view.start_index + offset, s.rows()[source].clone()))
                .collect::<Vec<_>>()
        })
    });
    let check_state = Memo::new(move |_| state.with(|s| s.header_check_state()));

    TableController {
        state,
        view,
        page_rows,
        check_state,
    }
}

impl TableController {
    pub fn set_rows(&self, rows: Vec<Record>) {
        self.state.update(|s| s.set_rows(rows));
    }

    pub fn set_search_query(&self, text: String) {
        self.state.update(|s| s.set_search_query(&text));
    }

    pub fn request_sort(&self, field: String) {
        self.state.update(|s| s.request_sort(&field));
    }

    /// Header checkbox: select or clear every row of the visible page.
    pub fn select_all_visible(&self, checked: bool) {
        self.state.update(|s| {
            let visible: Vec<Record> = s.paginated_rows().into_iter().cloned().collect();
            s.select_all(checked, &visible);
        });
    }

    pub fn toggle_row(&self, position: usize) {
        self.state.update(|s| s.toggle_row(position));
    }

    pub fn change_page(&self, page: usize) {
        self.state.update(|s| s.change_page(page));
    }

    pub fn change_rows_per_page(&self, rows_per_page: usize) {
        self.state.update(|s| s.change_rows_per_page(rows_per_page));
    }

    /// Row targeted by a delete action; the rows themselves are not touched.
    pub fn delete_row(&self, id: &str) -> Option<Record> {
        self.state.with_untracked(|s| s.delete_row(id).cloned())
    }

    pub fn search_query(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_query().to_string()))
    }

    pub fn order_by(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.order_by().map(str::to_string)))
    }

    pub fn order(&self) -> Signal<SortOrder> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.order()))
    }

    pub fn rows_per_page(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.rows_per_page()))
    }

    pub fn is_selected(&self, position: usize) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_selected(position)))
    }

    pub fn selected_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selected_rows().len()))
    }

    /// Ids of the selected rows, for bulk actions.
    pub fn selected_ids(&self) -> Vec<String> {
        self.state
            .with_untracked(|s| s.selected_rows().iter().filter_map(|r| r.id()).collect())
    }
}
