//! Sortable table header cell
//!
//! Clicking calls `on_sort` with the column field; the controller decides
//! whether that flips the direction or starts a new descending sort.

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::tabular::SortOrder;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Record field this column sorts by
    field: &'static str,

    #[prop(into)]
    order_by: Signal<Option<String>>,

    #[prop(into)]
    order: Signal<SortOrder>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Right-align numeric columns
    #[prop(optional)]
    numeric: bool,
) -> impl IntoView {
    let header_class = if numeric {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div class=header_class on:click=move |_| on_sort.run(field.to_string())>
                {label}
                <span class=move || order_by.with(|current| get_sort_class(current.as_deref(), field))>
                    {move || order_by.with(|current| get_sort_indicator(current.as_deref(), field, order.get()))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
