use contracts::dashboards::d401_dynamic_report::{
    ReportFilters, ReportFormat, ReportListItem, ReportOrigin, ReportRecord, EMPTY_REQUEST_MESSAGE,
};
use contracts::shared::options::FilterOptions;
use leptos::prelude::*;
use serde_json::Value;

use crate::dashboards::d401_dynamic_report::api;
use crate::dashboards::d401_dynamic_report::speech::{append_transcript, error_message, SpeechEvent};

#[derive(Clone, Copy)]
pub struct DynamicReportViewModel {
    pub texto: RwSignal<String>,
    /// Text came from dictation and has not been sent yet
    pub voice_mode: RwSignal<bool>,
    pub recording: RwSignal<bool>,
    pub report: RwSignal<Option<ReportRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub history: RwSignal<Vec<ReportListItem>>,
    pub show_history: RwSignal<bool>,
    pub show_filters: RwSignal<bool>,
    pub filters: RwSignal<ReportFilters>,
    pub options: RwSignal<FilterOptions>,
    /// `sugerencias` for the type of the last report (admin only)
    pub suggestions: RwSignal<Option<Value>>,
}

impl DynamicReportViewModel {
    pub fn new() -> Self {
        Self {
            texto: RwSignal::new(String::new()),
            voice_mode: RwSignal::new(false),
            recording: RwSignal::new(false),
            report: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            history: RwSignal::new(Vec::new()),
            show_history: RwSignal::new(false),
            show_filters: RwSignal::new(false),
            filters: RwSignal::new(ReportFilters::default()),
            options: RwSignal::new(FilterOptions::default()),
            suggestions: RwSignal::new(None),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading.get() && !self.recording.get() && !self.texto.with(|t| t.trim().is_empty())
    }

    pub fn load_history_command(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_reports().await {
                Ok(list) => this.history.set(list),
                Err(e) => log::error!("report list failed: {}", e),
            }
        });
    }

    pub fn load_options_command(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::report_filter_options().await {
                Ok(options) => this.options.set(options),
                Err(e) => log::error!("report filter options failed: {}", e),
            }
        });
    }

    pub fn use_example(&self, example: &str) {
        self.texto.set(example.to_string());
        self.voice_mode.set(false);
    }

    pub fn set_filter(&self, name: &str, value: String) {
        self.filters.update(|f| f.set_field(name, value));
    }

    pub fn clear_filters(&self) {
        self.filters.set(ReportFilters::default());
    }

    /// Dictation started: the previous text is discarded
    pub fn recording_started(&self) {
        self.voice_mode.set(true);
        self.recording.set(true);
        self.error.set(None);
        self.texto.set(String::new());
    }

    pub fn recording_stopped(&self) {
        self.recording.set(false);
        self.voice_mode.set(false);
    }

    pub fn speech_failed(&self, message: &str) {
        self.recording_stopped();
        self.error.set(Some(message.to_string()));
    }

    pub fn handle_speech(&self, event: SpeechEvent) {
        match event {
            SpeechEvent::Transcript(text) => {
                self.texto.update(|t| *t = append_transcript(t, &text));
                self.recording.set(false);
                self.voice_mode.set(true);
            }
            SpeechEvent::Ended => {
                self.recording.set(false);
                if self.texto.with_untracked(|t| t.trim().is_empty()) {
                    self.voice_mode.set(false);
                }
            }
            SpeechEvent::Failed(code) => {
                log::warn!("speech recognition error: {}", code);
                self.speech_failed(error_message(&code));
            }
        }
    }

    pub fn clear_command(&self) {
        self.texto.set(String::new());
        self.error.set(None);
        self.report.set(None);
        self.suggestions.set(None);
    }

    pub fn request_command(&self, is_admin: bool) {
        let texto = self.texto.get_untracked();
        if texto.trim().is_empty() {
            self.error.set(Some(EMPTY_REQUEST_MESSAGE.to_string()));
            return;
        }
        let origin = if self.voice_mode.get_untracked() {
            ReportOrigin::Voice
        } else {
            ReportOrigin::Text
        };
        let filters = if is_admin {
            self.filters.get_untracked()
        } else {
            ReportFilters::default()
        };

        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        this.report.set(None);
        this.suggestions.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::request_report(&texto, origin, &filters).await {
                Ok(report) => {
                    let tipo = report.tipo.clone();
                    this.report.set(Some(report));
                    this.load_history_command();
                    if is_admin && !tipo.is_empty() {
                        this.load_suggestions(tipo);
                    }
                }
                Err(e) => {
                    log::error!("report request failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.voice_mode.set(false);
            this.loading.set(false);
        });
    }

    fn load_suggestions(&self, tipo: String) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::smart_filters(&tipo).await {
                Ok(value) if !value.is_null() => this.suggestions.set(Some(value)),
                Ok(_) => {}
                Err(e) => log::warn!("smart filters for {} failed: {}", tipo, e),
            }
        });
    }

    pub fn download_command(&self, report_id: i64, format: ReportFormat) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = api::download_report(report_id, format).await {
                log::error!("report {} download failed: {}", report_id, e);
                let message = e.to_string();
                this.error.set(Some(if message.is_empty() {
                    format.error_fallback().to_string()
                } else {
                    message
                }));
            }
        });
    }
}
