use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / next pagination with a "page X of Y" label (1-indexed)
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] has_previous: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    /// Replaces the default "Página X de Y" label
    #[prop(into, optional)]
    summary: Signal<String>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=move || !has_previous.get()
                title="Página anterior"
            >
                {icon("chevron-left")}
                " Anterior"
            </button>
            <span class="pagination-info">
                {move || {
                    let text = summary.get();
                    if text.is_empty() {
                        format!("Página {} de {}", current_page.get(), total_pages.get().max(1))
                    } else {
                        text
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=move || !has_next.get()
                title="Página siguiente"
            >
                "Siguiente "
                {icon("chevron-right")}
            </button>
        </div>
    }
}
