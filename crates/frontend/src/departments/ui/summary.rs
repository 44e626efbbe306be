//! Summary strip of a department page: range selector plus stat cards.

use crate::shared::components::table::format_grams;
use crate::shared::components::{CardTone, RangeModeSelector, StatCard};
use crate::shared::date_utils::format_window;
use chrono::FixedOffset;
use contracts::domain::departments::DepartmentSpec;
use contracts::shared::record::Record;
use contracts::shared::summary::aggregate::metric_name;
use contracts::shared::summary::{summarize, RangeSelector, SelectorOutcome, SummaryReport};
use leptos::prelude::*;

fn column_label(spec: &DepartmentSpec, field: &str) -> &'static str {
    spec.columns
        .iter()
        .find(|c| c.field == field)
        .map(|c| c.label)
        .unwrap_or("Total")
}

fn selector_error(outcome: &SelectorOutcome) -> Option<String> {
    match outcome {
        SelectorOutcome::Invalid(err) => Some(err.to_string()),
        _ => None,
    }
}

#[component]
pub fn DepartmentSummary(
    spec: &'static DepartmentSpec,
    #[prop(into)]
    rows: Signal<Vec<Record>>,
    selector: RwSignal<RangeSelector>,
    #[prop(into)]
    outcome: Signal<SelectorOutcome>,
    offset: FixedOffset,
) -> impl IntoView {
    let fields = spec.summary;

    let report: Memo<Option<SummaryReport>> = Memo::new(move |_| {
        outcome.with(|outcome| rows.with(|rows| summarize(rows, &fields, outcome, offset)))
    });

    let grams_of = move |field: &'static str| {
        Signal::derive(move || {
            report.with(|r| r.as_ref().map(|r| format_grams(r.totals.get(&metric_name(field)))))
        })
    };
    let loss = Signal::derive(move || report.with(|r| r.as_ref().map(|r| format_grams(r.totals.loss()))));
    let loss_pct = Signal::derive(move || report.with(|r| r.as_ref().map(|r| r.totals.loss_percentage.clone())));
    let received_pct =
        Signal::derive(move || report.with(|r| r.as_ref().map(|r| r.totals.received_percentage.clone())));

    let extra_cards = fields
        .extra_fields
        .iter()
        .map(|field| {
            view! {
                <StatCard label=column_label(spec, field) icon_name="scale" value=grams_of(*field) unit="g" />
            }
        })
        .collect_view();

    view! {
        <section class="department-summary">
            <div class="department-summary__header">
                <RangeModeSelector
                    mode=Signal::derive(move || selector.with(|s| s.mode()))
                    on_select=Callback::new(move |mode| selector.update(|s| s.select(mode)))
                    show_custom=Signal::derive(move || selector.with(|s| s.shows_custom_inputs()))
                    custom_start=Signal::derive(move || selector.with(|s| s.custom_start()))
                    custom_end=Signal::derive(move || selector.with(|s| s.custom_end()))
                    on_custom_start=Callback::new(move |date| selector.update(|s| s.set_custom_start(date)))
                    on_custom_end=Callback::new(move |date| selector.update(|s| s.set_custom_end(date)))
                    error=Signal::derive(move || outcome.with(selector_error))
                />
                <span class="department-summary__window">
                    {move || {
                        report
                            .with(|r| r.as_ref().map(|r| format_window(&r.window)))
                            .unwrap_or_else(|| "Select a complete date range".to_string())
                    }}
                </span>
            </div>

            <div class="department-summary__cards">
                <StatCard label="Total issued" icon_name="inbox" value=grams_of(fields.issued_field) unit="g" />
                <StatCard
                    label="Total received"
                    icon_name="scale"
                    value=grams_of(fields.received_field)
                    unit="g"
                    tone=CardTone::Success
                />
                <StatCard label="Total loss" icon_name="trending-down" value=loss unit="g" tone=CardTone::Warning />
                <StatCard label="Loss" icon_name="percent" value=loss_pct unit="%" tone=CardTone::Warning />
                <StatCard label="Received" icon_name="percent" value=received_pct unit="%" tone=CardTone::Success />
                {extra_cards}
            </div>

            {move || {
                report
                    .with(|r| r.as_ref().map(|r| r.unparsable))
                    .filter(|count| *count > 0)
                    .map(|count| {
                        view! {
                            <p class="department-summary__note">
                                {format!("{} record(s) without a readable issue date were left out", count)}
                            </p>
                        }
                    })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::departments::CASTING;
    use contracts::shared::summary::InvalidRangeError;

    #[test]
    fn test_extra_cards_use_column_labels() {
        assert_eq!(column_label(&CASTING, "scrapWeight"), "Scrap (g)");
        assert_eq!(column_label(&CASTING, "unknown"), "Total");
    }

    #[test]
    fn test_only_invalid_outcome_reports_error() {
        assert_eq!(selector_error(&SelectorOutcome::Pending), None);
        let start = chrono::NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let end = chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let message = selector_error(&SelectorOutcome::Invalid(InvalidRangeError::Reversed { start, end }));
        assert_eq!(message.as_deref(), Some("End date 2025-04-01 is before start date 2025-04-10"));
    }
}
