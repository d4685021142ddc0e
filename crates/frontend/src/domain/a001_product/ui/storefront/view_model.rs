use contracts::domain::a001_product::{category_options, filter_products, Product, ALL_CATEGORIES};
use leptos::prelude::*;

use crate::domain::a001_product::api;
use crate::domain::a002_cart::ui::drawer::reload_cart_count;
use crate::domain::a002_cart::api as cart_api;
use crate::layout::global_context::{AppGlobalContext, Screen};

#[derive(Clone, Copy)]
pub struct StorefrontViewModel {
    pub products: RwSignal<Vec<Product>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
    /// Product whose add-to-cart request is in flight
    pub adding: RwSignal<Option<i64>>,
    /// Product shown in the detail modal
    pub selected: RwSignal<Option<Product>>,
}

impl StorefrontViewModel {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            category: RwSignal::new(ALL_CATEGORIES.to_string()),
            adding: RwSignal::new(None),
            selected: RwSignal::new(None),
        }
    }

    pub fn categories(&self) -> Vec<String> {
        self.products.with(|p| category_options(p))
    }

    pub fn visible_products(&self) -> Vec<Product> {
        let search = self.search.get();
        let category = self.category.get();
        self.products
            .with(|p| filter_products(p, &search, &category).into_iter().cloned().collect())
    }

    pub fn load_command(&self) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_products().await {
                Ok(items) => this.products.set(items),
                Err(e) => {
                    log::error!("catalog load failed: {}", e);
                    this.error.set(Some("No se pudo cargar el catálogo".into()));
                }
            }
            this.loading.set(false);
        });
    }

    /// Anonymous visitors are sent to the login screen instead
    pub fn add_to_cart_command(&self, producto_id: i64, authenticated: bool, ctx: AppGlobalContext) {
        if !authenticated {
            ctx.navigate(Screen::Login);
            return;
        }

        let this = *self;
        this.adding.set(Some(producto_id));
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match cart_api::add_to_cart(producto_id, 1).await {
                Ok(response) => {
                    if let Some(message) = response.message {
                        log::info!("{}", message);
                    }
                    reload_cart_count(ctx);
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.adding.set(None);
        });
    }
}
