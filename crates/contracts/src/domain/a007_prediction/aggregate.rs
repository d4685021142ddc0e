use crate::shared::query::QueryBuilder;
use crate::shared::serde_utils::{f64_lenient, opt_f64_lenient, string_or_null};
use serde::{Deserialize, Serialize};

pub const PREDICTIONS_PATH: &str = "/api/dashboard/predicciones/";
pub const PREDICTIONS_GENERATE_PATH: &str = "/api/dashboard/predicciones/generar/";
pub const PREDICTIONS_EXPORT_PATH: &str = "/api/dashboard/predicciones/exportar/";

/// Body of `POST /api/dashboard/predicciones/generar/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePredictionsRequest {
    pub periodo: String,
    pub meses_futuros: u32,
    pub categoria_id: Option<String>,
    pub guardar: bool,
}

impl Default for GeneratePredictionsRequest {
    fn default() -> Self {
        Self {
            periodo: "mes".into(),
            meses_futuros: 3,
            categoria_id: None,
            guardar: true,
        }
    }
}

impl GeneratePredictionsRequest {
    /// Empty values fall back to the defaults (`mes`, 3 months, all categories)
    pub fn normalized(mut self) -> Self {
        if self.periodo.is_empty() {
            self.periodo = "mes".into();
        }
        if self.meses_futuros == 0 {
            self.meses_futuros = 3;
        }
        self.categoria_id = self.categoria_id.filter(|c| !c.is_empty());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionFilter {
    pub categoria_id: Option<String>,
    pub fecha_desde: Option<String>,
    pub fecha_hasta: Option<String>,
    pub limite: Option<u32>,
}

impl PredictionFilter {
    pub fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push_opt("categoria_id", self.categoria_id.as_deref())
            .push_opt("fecha_desde", self.fecha_desde.as_deref())
            .push_opt("fecha_hasta", self.fecha_hasta.as_deref())
            .push_opt("limite", self.limite.filter(|l| *l > 0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha_prediccion: String,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub valor_predicho: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub confianza: f64,
}

impl Prediction {
    /// Confidence as a whole percentage: "87%"
    pub fn confidence_label(&self) -> String {
        format!("{:.0}%", self.confianza * 100.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_valor_predicho: f64,
    #[serde(default)]
    pub total_predicciones: u32,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub confianza_promedio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionTrends {
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub factor_crecimiento: Option<f64>,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub promedio_mensual_historico: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionsResponse {
    #[serde(default)]
    pub predicciones: Vec<Prediction>,
    #[serde(default)]
    pub resumen: Option<PredictionSummary>,
    #[serde(default)]
    pub tendencias: Option<PredictionTrends>,
}

/// Sum of predicted values, shown next to the prediction count
pub fn total_predicted(predictions: &[Prediction]) -> f64 {
    predictions.iter().map(|p| p.valor_predicho).sum()
}

/// `predicciones_ia_2024-10-15.pdf` / `.xlsx`
pub fn export_file_name(formato: &str, today: &str) -> String {
    let ext = if formato == "pdf" { "pdf" } else { "xlsx" };
    format!("predicciones_ia_{}.{}", today, ext)
}

pub fn export_path(formato: &str) -> String {
    QueryBuilder::new()
        .push("formato", formato)
        .to_url(PREDICTIONS_EXPORT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_defaults() {
        let body = serde_json::to_value(GeneratePredictionsRequest::default()).unwrap();
        assert_eq!(
            body,
            json!({ "periodo": "mes", "meses_futuros": 3, "categoria_id": null, "guardar": true })
        );
        let req = GeneratePredictionsRequest {
            periodo: String::new(),
            meses_futuros: 0,
            categoria_id: Some(String::new()),
            guardar: false,
        }
        .normalized();
        assert_eq!(req.periodo, "mes");
        assert_eq!(req.meses_futuros, 3);
        assert_eq!(req.categoria_id, None);
        assert!(!req.guardar);
    }

    #[test]
    fn test_filter_query() {
        let f = PredictionFilter { limite: Some(50), ..Default::default() };
        assert_eq!(f.to_query().to_url(PREDICTIONS_PATH), "/api/dashboard/predicciones/?limite=50");
    }

    #[test]
    fn test_response_parse() {
        let resp: PredictionsResponse = serde_json::from_value(json!({
            "success": true,
            "predicciones": [
                { "fecha_prediccion": "2024-11-01", "valor_predicho": "1500.5", "confianza": 0.87 },
                { "fecha_prediccion": "2024-12-01", "valor_predicho": 2000, "confianza": null }
            ],
            "resumen": { "total_valor_predicho": 3500.5, "total_predicciones": 2, "confianza_promedio": 0.8 }
        }))
        .unwrap();
        assert_eq!(resp.predicciones[0].valor_predicho, 1500.5);
        assert_eq!(resp.predicciones[0].confidence_label(), "87%");
        assert_eq!(resp.predicciones[1].confianza, 0.0);
        assert!(resp.tendencias.is_none());
        assert_eq!(total_predicted(&resp.predicciones), 3500.5);
    }

    #[test]
    fn test_export_names() {
        assert_eq!(export_file_name("pdf", "2024-10-15"), "predicciones_ia_2024-10-15.pdf");
        assert_eq!(export_file_name("excel", "2024-10-15"), "predicciones_ia_2024-10-15.xlsx");
        assert_eq!(export_path("excel"), "/api/dashboard/predicciones/exportar/?formato=excel");
    }
}
