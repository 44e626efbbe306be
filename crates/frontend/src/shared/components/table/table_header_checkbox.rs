//! "Select all" checkbox in the table header
//!
//! Shows unchecked, checked or indeterminate for the visible page and
//! reports the new checked state on click.

use contracts::shared::tabular::CheckState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<CheckState>,

    /// true = select the whole page, false = clear
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        let is_indeterminate = state.get() == CheckState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
