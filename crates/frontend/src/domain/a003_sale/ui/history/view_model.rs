use contracts::domain::a003_sale::{Pagination, SaleFilter, SaleRecord, SaleStats};
use contracts::shared::options::FilterOptions;
use leptos::prelude::*;

use crate::domain::a003_sale::api;

#[derive(Clone, Copy)]
pub struct SalesHistoryViewModel {
    pub filter: RwSignal<SaleFilter>,
    pub sales: RwSignal<Vec<SaleRecord>>,
    pub pagination: RwSignal<Option<Pagination>>,
    pub stats: RwSignal<Option<SaleStats>>,
    pub options: RwSignal<FilterOptions>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub expanded: RwSignal<Option<i64>>,
}

impl SalesHistoryViewModel {
    pub fn new() -> Self {
        Self {
            filter: RwSignal::new(SaleFilter::default()),
            sales: RwSignal::new(Vec::new()),
            pagination: RwSignal::new(None),
            stats: RwSignal::new(None),
            options: RwSignal::new(FilterOptions::default()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            expanded: RwSignal::new(None),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.options.with(|o| o.is_admin)
    }

    /// Filter options are optional; a failure only hides the choices
    pub fn load_options_command(&self) {
        let options = self.options;
        wasm_bindgen_futures::spawn_local(async move {
            match api::history_filter_options().await {
                Ok(loaded) => options.set(loaded),
                Err(e) => log::error!("history filter options failed: {}", e),
            }
        });
    }

    pub fn load_command(&self, filter: SaleFilter) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::sales_history(&filter).await {
                Ok(response) => {
                    this.sales.set(response.ventas);
                    this.pagination.set(response.paginacion);
                    this.stats.set(response.estadisticas);
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.loading.set(false);
        });
    }

    pub fn set_filter_command(&self, name: &str, value: String) {
        self.filter.update(|f| f.set_field(name, value));
    }

    pub fn clear_filters_command(&self) {
        self.filter.set(SaleFilter::default());
    }

    pub fn change_page_command(&self, page: u32) {
        self.filter.update(|f| f.go_to_page(page));
    }

    pub fn toggle_expanded(&self, id: i64) {
        self.expanded
            .update(|current| *current = if *current == Some(id) { None } else { Some(id) });
    }

    pub fn download_receipt_command(&self, venta_id: i64) {
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = api::download_receipt(venta_id).await {
                log::error!("receipt download failed: {}", e);
                error.set(Some(e.to_string()));
            }
        });
    }
}
