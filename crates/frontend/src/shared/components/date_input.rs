use chrono::NaiveDate;
use leptos::prelude::*;

/// Native date picker bound to an optional calendar date.
/// Clearing the input yields None.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional)]
    label: &'static str,
) -> impl IntoView {
    view! {
        <label class="date-input">
            <span class="date-input__label">{label}</span>
            <input
                type="date"
                prop:value=move || value.get().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    on_change.run(NaiveDate::parse_from_str(&text, "%Y-%m-%d").ok());
                }
            />
        </label>
    }
}
