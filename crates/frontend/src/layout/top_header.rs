//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and store name
//! - Cart button with the item badge
//! - User info with logout, or login / register for anonymous visitors

use crate::layout::global_context::{use_global_context, Screen};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::settings::storage::load_store_settings;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();

    let store_name = move || {
        let email = auth_state.get().user_email();
        load_store_settings(email.as_deref()).nombre_tienda
    };

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
            ctx.navigate(Screen::Storefront);
        });
    };

    let is_authenticated = move || auth_state.get().is_authenticated();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <Show when=is_authenticated>
                    <button
                        class="top-header__icon-btn"
                        on:click=move |_| ctx.toggle_left()
                        title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                    >
                        {move || if is_sidebar_visible() { icon("chevron-left") } else { icon("chevron-right") }}
                    </button>
                </Show>
                <span class="top-header__title" on:click=move |_| ctx.navigate(Screen::Storefront)>
                    {store_name}
                </span>
            </div>

            <div class="top-header__actions">
                <Show
                    when=is_authenticated
                    fallback=move || view! {
                        <button class="btn-secondary" on:click=move |_| ctx.navigate(Screen::Login)>
                            {icon("login")} " Iniciar sesión"
                        </button>
                        <button class="btn-primary" on:click=move |_| ctx.navigate(Screen::Register)>
                            "Registrarse"
                        </button>
                    }
                >
                    <Show when=move || !auth_state.get().is_admin()>
                        <button class="top-header__icon-btn top-header__cart" title="Mi carrito" on:click=move |_| ctx.open_cart()>
                            {icon("cart")}
                            {move || {
                                let count = ctx.cart_count.get();
                                (count > 0).then(|| view! { <span class="top-header__badge">{count}</span> })
                            }}
                        </button>
                    </Show>
                    <button
                        class="top-header__icon-btn"
                        title="Notificaciones"
                        on:click=move |_| ctx.navigate(Screen::Notifications)
                    >
                        {icon("bell")}
                    </button>
                    <div class="top-header__user">
                        <span>
                            {move || auth_state.get().user
                                .map(|u| u.display_name())
                                .unwrap_or_default()}
                        </span>
                        <span class="badge">
                            {move || if auth_state.get().is_admin() { "Administrador" } else { "Cliente" }}
                        </span>
                    </div>
                    <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                        {icon("logout")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
