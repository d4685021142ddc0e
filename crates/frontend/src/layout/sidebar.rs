//! Sidebar with the screens allowed for the current role

use crate::layout::global_context::{use_global_context, Screen};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();
    let is_admin = move || auth_state.get().is_admin();

    view! {
        <nav data-zone="left" class="sidebar" class:hidden=move || !ctx.left_open.get()>
            {move || {
                let admin = is_admin();
                Screen::menu(admin)
                    .iter()
                    .copied()
                    .map(|screen| view! {
                        <button
                            class="sidebar__item"
                            class:sidebar__item--active=move || ctx.active.get() == screen
                            title=screen.title(admin)
                            on:click=move |_| ctx.navigate(screen)
                        >
                            {icon(screen.icon())}
                            <span class="sidebar__label">{screen.title(admin)}</span>
                        </button>
                    })
                    .collect_view()
            }}
        </nav>
    }
}
