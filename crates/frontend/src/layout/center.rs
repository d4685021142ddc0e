use crate::dashboards::d400_sales_dashboard::ui::SalesDashboard;
use crate::dashboards::d401_dynamic_report::ui::DynamicReports;
use crate::domain::a001_product::ui::storefront::Storefront;
use crate::domain::a003_sale::ui::history::SalesHistory;
use crate::domain::a004_offer::ui::offers_coupons::OffersCouponsPage;
use crate::domain::a006_notification::ui::inbox::NotificationsPage;
use crate::domain::a007_prediction::ui::forecast::PredictionsPage;
use crate::layout::global_context::{use_global_context, Screen};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::{RequireAdmin, RequireAuth};
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::system::settings::SettingsPage;
use leptos::prelude::*;

fn screen_view(screen: Screen) -> AnyView {
    match screen {
        Screen::Storefront => view! { <Storefront /> }.into_any(),
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::Register => view! { <RegisterPage /> }.into_any(),
        Screen::Dashboard => view! { <RequireAdmin><SalesDashboard /></RequireAdmin> }.into_any(),
        Screen::SalesHistory => view! { <RequireAuth><SalesHistory /></RequireAuth> }.into_any(),
        Screen::Predictions => view! { <RequireAdmin><PredictionsPage /></RequireAdmin> }.into_any(),
        Screen::OffersCoupons => view! { <RequireAdmin><OffersCouponsPage /></RequireAdmin> }.into_any(),
        Screen::Notifications => view! { <RequireAuth><NotificationsPage /></RequireAuth> }.into_any(),
        Screen::Reports => view! { <RequireAuth><DynamicReports /></RequireAuth> }.into_any(),
        Screen::Settings => view! { <RequireAdmin><SettingsPage /></RequireAdmin> }.into_any(),
    }
}

/// Screen area; the requested screen falls back to the session's home
/// when the role may not see it
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();

    // None while the session check is running
    let screen = Memo::new(move |_| {
        let auth = auth_state.get();
        (!auth.checking).then(|| ctx.active.get().resolve(auth.is_authenticated(), auth.is_admin()))
    });

    view! {
        <div data-zone="center" class="app-content">
            {move || match screen.get() {
                Some(screen) => screen_view(screen),
                None => view! { <div class="loading">"Verificando sesión..."</div> }.into_any(),
            }}
        </div>
    }
}
