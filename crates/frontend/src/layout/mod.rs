pub mod center;
pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use crate::domain::a002_cart::ui::drawer::{reload_cart_count, CartDrawer};
use crate::system::auth::context::use_auth;
use center::Center;
use global_context::use_global_context;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Center              |
/// +------------------------------------------+
/// ```
///
/// The sidebar is rendered only for a logged-in user; the cart drawer
/// overlays everything.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();

    ctx.init_router_integration();

    // Cart badge follows the session
    Effect::new(move |_| {
        if auth_state.get().is_authenticated() {
            reload_cart_count(ctx);
        } else {
            ctx.cart_count.set(0);
            ctx.close_cart();
        }
    });

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Show when=move || auth_state.get().is_authenticated()>
                    <Sidebar />
                </Show>
                <div class="app-main">
                    <Center />
                </div>
            </div>
            <CartDrawer />
        </div>
    }
}
