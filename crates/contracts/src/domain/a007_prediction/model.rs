//! Estado y gestión del modelo de predicción

use crate::shared::serde_utils::{opt_f64_lenient, string_or_null};
use serde::{Deserialize, Serialize};

pub const MODEL_STATUS_PATH: &str = "/api/dashboard/modelo/estado/";
pub const MODEL_TRAIN_PATH: &str = "/api/dashboard/modelo/entrenar/";
pub const MODEL_UPDATE_PATH: &str = "/api/dashboard/modelo/actualizar/";
pub const MODEL_HISTORY_PATH: &str = "/api/dashboard/modelo/historial/";

pub const MODEL_ACTIVE: &str = "activo";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub r2_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub estado: String,
    #[serde(default)]
    pub metricas: Option<ModelMetrics>,
    #[serde(default)]
    pub registros_entrenamiento: Option<i64>,
}

impl ModelInfo {
    pub fn is_active(&self) -> bool {
        self.estado == MODEL_ACTIVE
    }

    /// R² with three decimals, `N/A` when missing or zero
    pub fn r2_label(&self) -> String {
        match self.metricas.as_ref().and_then(|m| m.r2_score) {
            Some(r2) if r2 != 0.0 => format!("{:.3}", r2),
            _ => "N/A".to_string(),
        }
    }

    pub fn training_records(&self) -> i64 {
        self.registros_entrenamiento.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelStatusResponse {
    #[serde(default)]
    pub modelo: Option<ModelInfo>,
}

impl ModelStatusResponse {
    pub fn is_active(&self) -> bool {
        self.modelo.as_ref().is_some_and(ModelInfo::is_active)
    }
}

/// One past training run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingRun {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, alias = "fecha_entrenamiento", alias = "fecha_creacion")]
    pub fecha: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub registros_entrenamiento: Option<i64>,
    #[serde(default)]
    pub metricas: Option<ModelMetrics>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingHistoryResponse {
    #[serde(default, alias = "entrenamientos", alias = "modelos")]
    pub historial: Vec<TrainingRun>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_parse() {
        let resp: ModelStatusResponse = serde_json::from_value(json!({
            "success": true,
            "modelo": {
                "nombre": "RandomForest",
                "version": "1.2",
                "estado": "activo",
                "metricas": { "r2_score": 0.91234 },
                "registros_entrenamiento": 340
            }
        }))
        .unwrap();
        assert!(resp.is_active());
        let model = resp.modelo.unwrap();
        assert_eq!(model.r2_label(), "0.912");
        assert_eq!(model.training_records(), 340);
    }

    #[test]
    fn test_inactive_and_missing_metrics() {
        let resp: ModelStatusResponse =
            serde_json::from_value(json!({ "modelo": { "nombre": "RF", "estado": "entrenando" } })).unwrap();
        assert!(!resp.is_active());
        assert_eq!(resp.modelo.unwrap().r2_label(), "N/A");
        assert!(!ModelStatusResponse::default().is_active());
    }

    #[test]
    fn test_history_aliases() {
        let resp: TrainingHistoryResponse = serde_json::from_value(json!({
            "entrenamientos": [{ "version": "1.0", "fecha_entrenamiento": "2024-10-01T10:00:00Z" }]
        }))
        .unwrap();
        assert_eq!(resp.historial.len(), 1);
        assert_eq!(resp.historial[0].fecha.as_deref(), Some("2024-10-01T10:00:00Z"));
    }
}
