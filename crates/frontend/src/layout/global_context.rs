use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Screens reachable from the shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Storefront,
    Login,
    Register,
    Dashboard,
    SalesHistory,
    Predictions,
    OffersCoupons,
    Notifications,
    Reports,
    Settings,
}

const ADMIN_MENU: [Screen; 7] = [
    Screen::Dashboard,
    Screen::SalesHistory,
    Screen::Predictions,
    Screen::OffersCoupons,
    Screen::Notifications,
    Screen::Reports,
    Screen::Settings,
];

const CLIENT_MENU: [Screen; 4] = [
    Screen::Storefront,
    Screen::SalesHistory,
    Screen::Notifications,
    Screen::Reports,
];

impl Screen {
    pub const ALL: [Screen; 10] = [
        Screen::Storefront,
        Screen::Login,
        Screen::Register,
        Screen::Dashboard,
        Screen::SalesHistory,
        Screen::Predictions,
        Screen::OffersCoupons,
        Screen::Notifications,
        Screen::Reports,
        Screen::Settings,
    ];

    /// Value of the `?active=` query parameter
    pub fn key(self) -> &'static str {
        match self {
            Screen::Storefront => "tienda",
            Screen::Login => "login",
            Screen::Register => "registro",
            Screen::Dashboard => "dashboard",
            Screen::SalesHistory => "historial",
            Screen::Predictions => "predicciones",
            Screen::OffersCoupons => "ofertas",
            Screen::Notifications => "notificaciones",
            Screen::Reports => "reportes",
            Screen::Settings => "configuracion",
        }
    }

    pub fn from_key(key: &str) -> Option<Screen> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn title(self, is_admin: bool) -> &'static str {
        match self {
            Screen::Storefront => "Tienda",
            Screen::Login => "Iniciar sesión",
            Screen::Register => "Crear cuenta",
            Screen::Dashboard => "Dashboard",
            Screen::SalesHistory if is_admin => "Historial de ventas",
            Screen::SalesHistory => "Mis compras",
            Screen::Predictions => "Predicciones IA",
            Screen::OffersCoupons => "Ofertas y cupones",
            Screen::Notifications => "Notificaciones",
            Screen::Reports => "Reportes",
            Screen::Settings => "Configuración",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Storefront => "store",
            Screen::Login | Screen::Register => "login",
            Screen::Dashboard => "dashboard",
            Screen::SalesHistory => "history",
            Screen::Predictions => "predictions",
            Screen::OffersCoupons => "offers",
            Screen::Notifications => "bell",
            Screen::Reports => "reports",
            Screen::Settings => "settings",
        }
    }

    /// Sidebar entries for a logged-in user
    pub fn menu(is_admin: bool) -> &'static [Screen] {
        if is_admin {
            &ADMIN_MENU
        } else {
            &CLIENT_MENU
        }
    }

    /// Screen shown after login or when the requested one is not allowed
    pub fn home(authenticated: bool, is_admin: bool) -> Screen {
        if authenticated && is_admin {
            Screen::Dashboard
        } else {
            Screen::Storefront
        }
    }

    /// Whether the screen may be shown for the given session
    pub fn is_allowed(self, authenticated: bool, is_admin: bool) -> bool {
        match self {
            Screen::Storefront => true,
            Screen::Login | Screen::Register => !authenticated,
            other => authenticated && Self::menu(is_admin).contains(&other),
        }
    }

    /// Requested screen, or the session's home when it is not allowed
    pub fn resolve(self, authenticated: bool, is_admin: bool) -> Screen {
        if self.is_allowed(authenticated, is_admin) {
            self
        } else {
            Self::home(authenticated, is_admin)
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
    pub left_open: RwSignal<bool>,
    pub cart_open: RwSignal<bool>,
    /// Badge on the cart button (`total_items` of the last loaded cart)
    pub cart_count: RwSignal<i64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::Storefront),
            left_open: RwSignal::new(true),
            cart_open: RwSignal::new(false),
            cart_count: RwSignal::new(0),
        }
    }

    /// Restore the screen from `?active=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(screen) = params.get("active").and_then(|key| Screen::from_key(key)) {
            self.active.set(screen);
        }

        let this = *self;
        Effect::new(move |_| {
            let screen = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                screen.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, screen: Screen) {
        log::debug!("navigate: {}", screen.key());
        self.active.set(screen);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn open_cart(&self) {
        self.cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.cart_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_roundtrip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_key(screen.key()), Some(screen));
        }
        assert_eq!(Screen::from_key("desconocido"), None);
    }

    #[test]
    fn test_role_menus() {
        assert!(Screen::menu(true).contains(&Screen::Predictions));
        assert!(!Screen::menu(false).contains(&Screen::Predictions));
        assert!(Screen::menu(false).contains(&Screen::Storefront));
        assert!(!Screen::menu(true).contains(&Screen::Storefront));
    }

    #[test]
    fn test_resolve_by_session() {
        assert_eq!(Screen::Dashboard.resolve(false, false), Screen::Storefront);
        assert_eq!(Screen::Settings.resolve(true, false), Screen::Storefront);
        assert_eq!(Screen::Login.resolve(true, true), Screen::Dashboard);
        assert_eq!(Screen::Reports.resolve(true, false), Screen::Reports);
        assert_eq!(Screen::Register.resolve(false, false), Screen::Register);
    }

    #[test]
    fn test_titles_depend_on_role() {
        assert_eq!(Screen::SalesHistory.title(true), "Historial de ventas");
        assert_eq!(Screen::SalesHistory.title(false), "Mis compras");
    }
}
