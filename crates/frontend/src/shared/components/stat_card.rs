use crate::shared::icons::icon;
use contracts::shared::notification::Severity;
use leptos::prelude::*;

/// Summary widget: label, icon and a preformatted value
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value; "..." while loading
    #[prop(into)]
    value: Signal<String>,
    /// Visual status of the card
    #[prop(into, optional)]
    status: Option<Signal<Severity>>,
) -> impl IntoView {
    let card_class = move || match status.map(|s| s.get()) {
        Some(Severity::Success) => "stat-card stat-card--success",
        Some(Severity::Danger) => "stat-card stat-card--error",
        Some(Severity::Warning) => "stat-card stat-card--warning",
        Some(Severity::Info) | None => "stat-card",
    };

    view! {
        <div class=card_class>
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
