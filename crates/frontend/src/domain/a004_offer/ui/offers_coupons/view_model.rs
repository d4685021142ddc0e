use chrono::Utc;
use contracts::domain::a004_offer::{
    Offer, OfferFilter, OfferForm, OfferSuggestionsResponse, ProductSuggestion, SeasonalOffer,
};
use contracts::domain::a005_coupon::{generate_coupon_code, Coupon, CouponFilter, CouponForm};
use contracts::shared::api::body_message;
use leptos::prelude::*;

use crate::domain::a004_offer::api;
use crate::domain::a005_coupon::api as coupon_api;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffersTab {
    Offers,
    Coupons,
}

#[derive(Clone, Copy)]
pub struct OffersCouponsViewModel {
    pub tab: RwSignal<OffersTab>,
    pub offers: RwSignal<Vec<Offer>>,
    pub coupons: RwSignal<Vec<Coupon>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub suggestions: RwSignal<Option<OfferSuggestionsResponse>>,
    pub offer_form: RwSignal<Option<OfferForm>>,
    pub coupon_form: RwSignal<Option<CouponForm>>,
}

impl OffersCouponsViewModel {
    pub fn new() -> Self {
        Self {
            tab: RwSignal::new(OffersTab::Offers),
            offers: RwSignal::new(Vec::new()),
            coupons: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            suggestions: RwSignal::new(None),
            offer_form: RwSignal::new(None),
            coupon_form: RwSignal::new(None),
        }
    }

    /// Load the list belonging to the current tab
    pub fn load_tab_command(&self, tab: OffersTab) {
        match tab {
            OffersTab::Offers => self.load_offers_command(),
            OffersTab::Coupons => self.load_coupons_command(),
        }
    }

    pub fn load_offers_command(&self) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_offers(&OfferFilter::default()).await {
                Ok(response) => this.offers.set(response.ofertas),
                Err(e) => {
                    log::error!("offers load failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn load_coupons_command(&self) {
        let this = *self;
        this.loading.set(true);
        let filter = CouponFilter {
            estado: None,
            activos: Some(true),
        };
        wasm_bindgen_futures::spawn_local(async move {
            match coupon_api::list_coupons(&filter).await {
                Ok(response) => this.coupons.set(response.cupones),
                Err(e) => {
                    log::error!("coupons load failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn load_suggestions_command(&self) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::ai_suggestions().await {
                Ok(response) => this.suggestions.set(Some(response)),
                Err(e) => {
                    log::error!("offer suggestions failed: {}", e);
                    this.error.set(Some("Error al cargar sugerencias de IA".into()));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn use_product_suggestion(&self, suggestion: &ProductSuggestion) {
        self.offer_form
            .set(Some(OfferForm::from_suggestion(suggestion, Utc::now())));
        self.suggestions.set(None);
    }

    pub fn use_seasonal_suggestion(&self, offer: &SeasonalOffer) {
        self.offer_form.set(Some(OfferForm::from_seasonal(offer, Utc::now())));
        self.suggestions.set(None);
    }

    pub fn new_offer_command(&self) {
        self.offer_form.set(Some(OfferForm::new_at(Utc::now())));
    }

    pub fn new_coupon_command(&self) {
        self.coupon_form.set(Some(CouponForm::new_at(Utc::now())));
    }

    pub fn update_offer_form(&self, f: impl FnOnce(&mut OfferForm)) {
        self.offer_form.update(|form| {
            if let Some(form) = form.as_mut() {
                f(form);
            }
        });
    }

    pub fn update_coupon_form(&self, f: impl FnOnce(&mut CouponForm)) {
        self.coupon_form.update(|form| {
            if let Some(form) = form.as_mut() {
                f(form);
            }
        });
    }

    pub fn generate_code_command(&self) {
        let code = generate_coupon_code();
        self.update_coupon_form(|form| form.codigo = code);
    }

    pub fn save_offer_command(&self) {
        let this = *self;
        let Some(form) = this.offer_form.get_untracked() else {
            return;
        };
        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(message) => {
                this.error.set(Some(message));
                return;
            }
        };
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_offer(&dto).await {
                Ok(body) => {
                    let message = body_message(&body).unwrap_or("Oferta creada exitosamente");
                    this.notice.set(Some(message.to_string()));
                    this.offer_form.set(None);
                    this.load_offers_command();
                }
                Err(e) => {
                    log::error!("offer create failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
        });
    }

    pub fn save_coupon_command(&self) {
        let this = *self;
        let Some(form) = this.coupon_form.get_untracked() else {
            return;
        };
        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(message) => {
                this.error.set(Some(message));
                return;
            }
        };
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match coupon_api::create_coupon(&dto).await {
                Ok(body) => {
                    let message = body_message(&body).unwrap_or("Cupón creado exitosamente");
                    this.notice.set(Some(message.to_string()));
                    this.coupon_form.set(None);
                    this.load_coupons_command();
                }
                Err(e) => {
                    log::error!("coupon create failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
        });
    }
}
