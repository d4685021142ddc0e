use contracts::domain::a007_prediction::{
    chart_series, ChartPoint, GeneratePredictionsRequest, HistoryPoint, ModelStatusResponse,
    Prediction, PredictionFilter, PredictionSummary, PredictionTrends, TrainingRun,
};
use contracts::shared::api::body_message;
use leptos::prelude::*;

use crate::domain::a003_sale::api as sale_api;
use crate::domain::a007_prediction::api;

const EXISTING_LIMIT: u32 = 50;

/// Upper bound of the horizon input for a period
pub fn max_periods(periodo: &str) -> u32 {
    match periodo {
        "dia" => 30,
        _ => 12,
    }
}

pub fn max_periods_hint(periodo: &str) -> &'static str {
    match periodo {
        "mes" => "Máximo 12 meses",
        "semana" => "Máximo 12 semanas",
        _ => "Máximo 30 días",
    }
}

#[derive(Clone, Copy)]
pub struct PredictionsViewModel {
    pub model: RwSignal<Option<ModelStatusResponse>>,
    pub history: RwSignal<Vec<HistoryPoint>>,
    pub predictions: RwSignal<Vec<Prediction>>,
    pub summary: RwSignal<Option<PredictionSummary>>,
    pub trends: RwSignal<Option<PredictionTrends>>,
    pub params: RwSignal<GeneratePredictionsRequest>,
    pub generating: RwSignal<bool>,
    pub model_busy: RwSignal<bool>,
    pub training_runs: RwSignal<Option<Vec<TrainingRun>>>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
}

impl PredictionsViewModel {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(None),
            history: RwSignal::new(Vec::new()),
            predictions: RwSignal::new(Vec::new()),
            summary: RwSignal::new(None),
            trends: RwSignal::new(None),
            params: RwSignal::new(GeneratePredictionsRequest::default()),
            generating: RwSignal::new(false),
            model_busy: RwSignal::new(false),
            training_runs: RwSignal::new(None),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
        }
    }

    pub fn model_active(&self) -> bool {
        self.model.with(|m| m.as_ref().is_some_and(ModelStatusResponse::is_active))
    }

    pub fn chart(&self) -> Vec<ChartPoint> {
        self.history
            .with(|history| self.predictions.with(|preds| chart_series(history, preds)))
    }

    pub fn init_command(&self) {
        self.load_model_command();
        self.load_history_command();
        self.load_existing_command();
    }

    pub fn load_model_command(&self) {
        let model = self.model;
        wasm_bindgen_futures::spawn_local(async move {
            match api::model_status().await {
                Ok(status) => model.set(Some(status)),
                Err(e) => log::error!("model status failed: {}", e),
            }
        });
    }

    /// Twelve months of totals; the chart works without them
    pub fn load_history_command(&self) {
        let history = self.history;
        wasm_bindgen_futures::spawn_local(async move {
            match sale_api::aggregated_history("mes", "12").await {
                Ok(response) => history.set(response.historial.iter().map(HistoryPoint::normalize).collect()),
                Err(e) => {
                    log::warn!("aggregated history unavailable: {}", e);
                    history.set(Vec::new());
                }
            }
        });
    }

    pub fn load_existing_command(&self) {
        let predictions = self.predictions;
        let filter = PredictionFilter {
            limite: Some(EXISTING_LIMIT),
            ..PredictionFilter::default()
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_predictions(&filter).await {
                Ok(response) => predictions.set(response.predicciones),
                Err(e) => log::warn!("existing predictions unavailable: {}", e),
            }
        });
    }

    /// Quick presets: period and horizon, all categories
    pub fn preset_command(&self, periodo: &str, horizon: u32) {
        self.params.update(|p| {
            p.periodo = periodo.to_string();
            p.meses_futuros = horizon;
            p.categoria_id = None;
        });
    }

    pub fn generate_command(&self) {
        let this = *self;
        this.generating.set(true);
        this.error.set(None);
        let params = this.params.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api::generate_predictions(params).await {
                Ok(response) => {
                    this.predictions.set(response.predicciones);
                    this.summary.set(response.resumen);
                    this.trends.set(response.tendencias);
                    this.load_existing_command();
                }
                Err(e) => {
                    log::error!("generate predictions failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.generating.set(false);
        });
    }

    /// `retrain` runs a full training, otherwise an incremental update
    pub fn train_command(&self, retrain: bool) {
        let this = *self;
        this.model_busy.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = if retrain {
                api::train_model().await
            } else {
                api::update_model().await
            };
            match result {
                Ok(body) => {
                    let fallback = if retrain { "Modelo entrenado" } else { "Modelo actualizado" };
                    this.notice.set(Some(body_message(&body).unwrap_or(fallback).to_string()));
                    this.load_model_command();
                }
                Err(e) => {
                    log::error!("model training failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.model_busy.set(false);
        });
    }

    pub fn toggle_training_runs_command(&self) {
        let runs = self.training_runs;
        if runs.with_untracked(Option::is_some) {
            runs.set(None);
            return;
        }
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::training_history().await {
                Ok(response) => runs.set(Some(response.historial)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }

    pub fn export_command(&self, formato: &'static str) {
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = api::export_predictions(formato).await {
                log::error!("prediction export failed: {}", e);
                error.set(Some(
                    "Error al exportar el reporte. Por favor, intenta nuevamente.".into(),
                ));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_limits() {
        assert_eq!(max_periods("mes"), 12);
        assert_eq!(max_periods("semana"), 12);
        assert_eq!(max_periods("dia"), 30);
        assert_eq!(max_periods_hint("semana"), "Máximo 12 semanas");
        assert_eq!(max_periods_hint("dia"), "Máximo 30 días");
    }
}
