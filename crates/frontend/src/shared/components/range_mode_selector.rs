use super::date_input::DateInput;
use chrono::NaiveDate;
use contracts::shared::summary::RangeMode;
use leptos::prelude::*;
use thaw::*;

/// Today / Last 7 days / This month / Custom selector of the summary strip.
///
/// The two date inputs appear while `show_custom` holds. `error` carries the
/// validation message of a reversed custom range.
#[component]
pub fn RangeModeSelector(
    #[prop(into)]
    mode: Signal<RangeMode>,
    on_select: Callback<RangeMode>,
    /// Whether the custom date inputs are shown
    #[prop(into)]
    show_custom: Signal<bool>,
    #[prop(into)]
    custom_start: Signal<Option<NaiveDate>>,
    #[prop(into)]
    custom_end: Signal<Option<NaiveDate>>,
    on_custom_start: Callback<Option<NaiveDate>>,
    on_custom_end: Callback<Option<NaiveDate>>,
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="range-mode-selector">
            <ButtonGroup>
                {RangeMode::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=Signal::derive(move || {
                                    if mode.get() == option {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                })
                                on_click=move |_| on_select.run(option)
                            >
                                {option.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </ButtonGroup>

            <Show when=move || show_custom.get()>
                <div class="range-mode-selector__custom">
                    <DateInput label="From" value=custom_start on_change=on_custom_start />
                    <DateInput label="To" value=custom_end on_change=on_custom_end />
                </div>
            </Show>

            {move || error.get().map(|message| view! {
                <div class="range-mode-selector__error">{message}</div>
            })}
        </div>
    }
}
