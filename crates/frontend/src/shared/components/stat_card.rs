use crate::shared::icons::icon;
use leptos::prelude::*;

/// Indicator card: label, formatted value and an optional subtitle.
///
/// `variant` maps to a BEM modifier (`success`, `warning`, `error`, `info`).
#[component]
pub fn StatCard(
    label: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Icon name from the icon() helper
    #[prop(optional)]
    icon_name: &'static str,
    #[prop(optional)]
    variant: &'static str,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = if variant.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", variant)
    };

    view! {
        <div class=class>
            <div class="stat-card__header">
                {(!icon_name.is_empty()).then(|| view! { <span class="stat-card__icon">{icon(icon_name)}</span> })}
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
            {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
