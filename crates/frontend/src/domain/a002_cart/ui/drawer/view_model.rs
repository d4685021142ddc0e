use contracts::domain::a002_cart::{Cart, CartMutationResponse, CheckoutRequest};
use contracts::shared::api::ApiError;
use leptos::prelude::*;
use std::future::Future;

use crate::domain::a002_cart::api;
use crate::layout::global_context::AppGlobalContext;

/// Refresh the cart badge; a failed load shows an empty cart
pub fn reload_cart_count(ctx: AppGlobalContext) {
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_cart().await {
            Ok(cart) => ctx.cart_count.set(cart.total_items),
            Err(e) => {
                log::warn!("cart count unavailable: {}", e);
                ctx.cart_count.set(0);
            }
        }
    });
}

#[derive(Clone, Copy)]
pub struct CartDrawerViewModel {
    pub cart: RwSignal<Option<Cart>>,
    pub loading: RwSignal<bool>,
    /// A mutation is in flight
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub coupon_code: RwSignal<String>,
    pub checkout_form: RwSignal<CheckoutRequest>,
    pub checkout_open: RwSignal<bool>,
    ctx: AppGlobalContext,
}

impl CartDrawerViewModel {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self {
            cart: RwSignal::new(None),
            loading: RwSignal::new(false),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            coupon_code: RwSignal::new(String::new()),
            checkout_form: RwSignal::new(CheckoutRequest {
                metodo_pago: "efectivo".into(),
                ..Default::default()
            }),
            checkout_open: RwSignal::new(false),
            ctx,
        }
    }

    pub fn total(&self) -> f64 {
        self.cart.with(|c| c.as_ref().map(|c| c.total).unwrap_or(0.0))
    }

    pub fn load_command(&self) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_cart().await {
                Ok(cart) => {
                    this.ctx.cart_count.set(cart.total_items);
                    this.cart.set(Some(cart));
                    this.error.set(None);
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.loading.set(false);
        });
    }

    /// Run a mutation, report its outcome and reload the cart
    fn mutate<F>(&self, request: F)
    where
        F: Future<Output = Result<CartMutationResponse, ApiError>> + 'static,
    {
        let this = *self;
        this.busy.set(true);
        this.error.set(None);
        this.notice.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match request.await {
                Ok(response) => {
                    this.notice.set(response.message.filter(|m| !m.is_empty()));
                    this.load_command();
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.busy.set(false);
        });
    }

    /// Quantities below one remove the item
    pub fn set_quantity_command(&self, item_id: i64, cantidad: i64) {
        if cantidad < 1 {
            self.remove_command(item_id);
        } else {
            self.mutate(api::update_cart_item(item_id, cantidad));
        }
    }

    pub fn remove_command(&self, item_id: i64) {
        self.mutate(api::remove_from_cart(item_id));
    }

    pub fn save_for_later_command(&self, item_id: i64) {
        self.mutate(api::save_for_later(item_id));
    }

    pub fn clear_command(&self) {
        self.mutate(api::clear_cart());
    }

    pub fn apply_coupon_command(&self) {
        let code = self.coupon_code.get_untracked().trim().to_uppercase();
        if code.is_empty() {
            self.error.set(Some("Ingresa un código de cupón".into()));
            return;
        }
        let total = self.cart.with_untracked(|c| c.as_ref().map(|c| c.total).unwrap_or(0.0));
        self.mutate(async move { api::apply_discount(&code, total).await });
    }

    pub fn checkout_command(&self) {
        let mut data = self.checkout_form.get_untracked();
        if let Err(e) = data.validate() {
            self.error.set(Some(e));
            return;
        }
        data.codigo_descuento = self
            .cart
            .with_untracked(|c| c.as_ref().and_then(|c| c.codigo_descuento.clone()));

        let this = *self;
        this.busy.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::checkout(&data).await {
                Ok(response) => {
                    log::info!("checkout completed");
                    this.notice.set(Some(
                        response
                            .message
                            .unwrap_or_else(|| "¡Compra realizada con éxito!".into()),
                    ));
                    this.checkout_open.set(false);
                    this.load_command();
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.busy.set(false);
        });
    }
}
