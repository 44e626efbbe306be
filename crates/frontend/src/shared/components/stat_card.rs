use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour of a summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Success,
    Warning,
}

impl CardTone {
    fn class(self) -> &'static str {
        match self {
            CardTone::Neutral => "stat-card",
            CardTone::Success => "stat-card stat-card--success",
            CardTone::Warning => "stat-card stat-card--warning",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value, None while the strip is withheld
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Unit appended after the value ("g", "%")
    #[prop(optional)]
    unit: &'static str,
    #[prop(optional, default = CardTone::Neutral)]
    tone: CardTone,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) if unit.is_empty() => v,
        Some(v) => format!("{} {}", v, unit),
        None => "—".to_string(),
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
