use crate::shared::api::{body_message, ApiError};
use crate::shared::date_utils::display_datetime;
use crate::shared::query::QueryBuilder;
use crate::shared::serde_utils::string_or_null;
use crate::shared::text::humanize_first_segment;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const REPORT_REQUEST_PATH: &str = "/api/reportes/solicitar/";
pub const REPORT_SMART_FILTERS_PATH: &str = "/api/reportes/filtros-inteligentes/";
pub const REPORT_LIST_PATH: &str = "/api/reportes/listar/";
pub const REPORT_FILTER_OPTIONS_PATH: &str = "/api/reportes/opciones-filtros/";

pub const EMPTY_REQUEST_MESSAGE: &str = "Por favor ingresa o dicta una solicitud de reporte";
pub const DATE_PLACEHOLDER: &str = "Fecha no disponible";

/// How the request text was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportOrigin {
    #[default]
    Text,
    Voice,
}

/// Optional filters of the admin "advanced filters" panel, as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilters {
    pub fecha_desde: String,
    pub fecha_hasta: String,
    pub categoria: String,
    pub cliente: String,
    pub estado: String,
    pub metodo_pago: String,
    pub monto_minimo: String,
    pub monto_maximo: String,
}

impl ReportFilters {
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "fecha_desde" => &mut self.fecha_desde,
            "fecha_hasta" => &mut self.fecha_hasta,
            "categoria" => &mut self.categoria,
            "cliente" => &mut self.cliente,
            "estado" => &mut self.estado,
            "metodo_pago" => &mut self.metodo_pago,
            "monto_minimo" => &mut self.monto_minimo,
            "monto_maximo" => &mut self.monto_maximo,
            _ => return,
        };
        *slot = value;
    }

    /// Only the filled fields, or `None` when nothing is set
    pub fn applicable(&self) -> Option<Map<String, Value>> {
        let fields = [
            ("fecha_desde", &self.fecha_desde),
            ("fecha_hasta", &self.fecha_hasta),
            ("categoria", &self.categoria),
            ("cliente", &self.cliente),
            ("estado", &self.estado),
            ("metodo_pago", &self.metodo_pago),
            ("monto_minimo", &self.monto_minimo),
            ("monto_maximo", &self.monto_maximo),
        ];
        let map: Map<String, Value> = fields
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.to_string(), Value::String(v.clone())))
            .collect();
        if map.is_empty() {
            None
        } else {
            Some(map)
        }
    }
}

/// Body of `POST /api/reportes/solicitar/`
pub fn request_body(texto: &str, origin: ReportOrigin, filtros: Option<Map<String, Value>>) -> Value {
    let texto = texto.trim();
    let mut body = json!({ "texto": texto });
    if origin == ReportOrigin::Voice {
        body["audio"] = Value::Null;
        body["texto_transcrito"] = Value::String(texto.to_string());
    }
    if let Some(filtros) = filtros {
        body["filtros"] = Value::Object(filtros);
    }
    body
}

/// Error for a failed report request; the backend message wins over the
/// status-specific fallback
pub fn request_error(status: u16, body: &Value) -> ApiError {
    let fallback = match status {
        403 => "No tienes permisos para solicitar este tipo de reporte. Solo puedes consultar tus propias compras.".to_string(),
        400 => "Error al interpretar la solicitud. Intenta ser más específico, por ejemplo: \"Mis compras del último mes\"".to_string(),
        500 => "Error al generar el reporte. Por favor, intenta nuevamente.".to_string(),
        _ => format!("Error al solicitar reporte ({})", status),
    };
    ApiError::Http {
        status,
        message: body_message(body).map(str::to_string).unwrap_or(fallback),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartFiltersRequest {
    pub tipo_reporte: String,
}

/// Generated report as returned under `reporte`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub tipo: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha: String,
    #[serde(default)]
    pub datos: Value,
}

impl ReportRecord {
    pub fn title(&self) -> String {
        self.nombre
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Reporte Generado".to_string())
    }

    /// Type badge: first `_` replaced, words capitalised
    pub fn type_label(&self) -> String {
        humanize_first_segment(&self.tipo)
    }

    pub fn date_label(&self) -> String {
        display_datetime(&self.fecha, DATE_PLACEHOLDER)
    }
}

/// Entry of the report history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportListItem {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub tipo: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha: String,
    #[serde(default)]
    pub origen: Option<String>,
}

impl ReportListItem {
    pub fn origin_label(&self) -> Option<&'static str> {
        match self.origen.as_deref() {
            None | Some("") => None,
            Some("voz") => Some("🎤 Voz"),
            Some(_) => Some("✍️ Texto"),
        }
    }

    pub fn date_label(&self) -> String {
        display_datetime(&self.fecha, DATE_PLACEHOLDER)
    }
}

/// Export formats offered for a stored report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Excel,
}

impl ReportFormat {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "xlsx",
        }
    }

    pub fn error_fallback(&self) -> &'static str {
        match self {
            Self::Pdf => "Error al descargar PDF",
            Self::Excel => "Error al descargar Excel",
        }
    }
}

pub fn download_path(report_id: i64, format: ReportFormat) -> String {
    QueryBuilder::new()
        .push("formato", format.code())
        .to_url(&format!("/api/reportes/{}/descargar/", report_id))
}

pub fn download_file_name(report_id: i64, format: ReportFormat) -> String {
    format!("reporte_{}.{}", report_id, format.extension())
}

pub fn download_error(status: u16, body: &Value) -> ApiError {
    ApiError::Http {
        status,
        message: body_message(body)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Error al descargar reporte ({})", status)),
    }
}

pub const ADMIN_EXAMPLES: [&str; 7] = [
    "¿Cuánto vendí este mes?",
    "Clientes más recurrentes",
    "Productos más vendidos",
    "Productos con bajo stock",
    "Lista de todos los clientes",
    "Ventas agrupadas por categoría",
    "Top 10 productos más vendidos",
];

pub const CLIENT_EXAMPLES: [&str; 5] = [
    "Mis compras del último mes",
    "Productos que he comprado",
    "Resumen de mis gastos",
    "Cuánto he gastado",
    "Historial de mis compras",
];

pub fn example_prompts(is_admin: bool) -> &'static [&'static str] {
    if is_admin {
        &ADMIN_EXAMPLES
    } else {
        &CLIENT_EXAMPLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_body() {
        let body = request_body("  Mis compras  ", ReportOrigin::Text, None);
        assert_eq!(body, json!({ "texto": "Mis compras" }));
    }

    #[test]
    fn test_voice_body_with_filters() {
        let mut filters = ReportFilters::default();
        filters.set_field("estado", "completada".into());
        filters.set_field("desconocido", "x".into());
        let body = request_body("ventas de hoy ", ReportOrigin::Voice, filters.applicable());
        assert_eq!(
            body,
            json!({
                "texto": "ventas de hoy",
                "audio": null,
                "texto_transcrito": "ventas de hoy",
                "filtros": { "estado": "completada" }
            })
        );
    }

    #[test]
    fn test_applicable_filters() {
        assert_eq!(ReportFilters::default().applicable(), None);
        let f = ReportFilters {
            fecha_desde: "2024-01-01".into(),
            monto_maximo: "500".into(),
            ..Default::default()
        };
        let map = f.applicable().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["monto_maximo"], "500");
    }

    #[test]
    fn test_request_errors() {
        let empty = json!({ "success": false });
        assert!(request_error(403, &empty).to_string().starts_with("No tienes permisos"));
        assert!(request_error(400, &empty).to_string().contains("\"Mis compras del último mes\""));
        assert_eq!(
            request_error(500, &empty).to_string(),
            "Error al generar el reporte. Por favor, intenta nuevamente."
        );
        assert_eq!(request_error(502, &empty).to_string(), "Error al solicitar reporte (502)");
        let with_message = json!({ "message": "Consulta no soportada" });
        assert_eq!(request_error(400, &with_message).to_string(), "Consulta no soportada");
        assert_eq!(request_error(403, &empty).status(), Some(403));
    }

    #[test]
    fn test_record_labels() {
        let record: ReportRecord = serde_json::from_value(json!({
            "id": 12,
            "tipo": "mis_compras_detalle",
            "fecha": "2024-10-15T14:02:00Z",
            "datos": { "datos": [] }
        }))
        .unwrap();
        assert_eq!(record.title(), "Reporte Generado");
        assert_eq!(record.type_label(), "Mis Compras_detalle");
        assert_eq!(record.date_label(), "15 oct 2024, 14:02");

        let item = ReportListItem {
            id: 1,
            nombre: "Ventas".into(),
            tipo: "ventas".into(),
            fecha: "invalid".into(),
            origen: Some("voz".into()),
        };
        assert_eq!(item.origin_label(), Some("🎤 Voz"));
        assert_eq!(item.date_label(), DATE_PLACEHOLDER);
    }

    #[test]
    fn test_download_names() {
        assert_eq!(download_path(7, ReportFormat::Excel), "/api/reportes/7/descargar/?formato=excel");
        assert_eq!(download_file_name(7, ReportFormat::Excel), "reporte_7.xlsx");
        assert_eq!(download_file_name(7, ReportFormat::Pdf), "reporte_7.pdf");
        assert_eq!(download_error(404, &json!({})).to_string(), "Error al descargar reporte (404)");
    }

    #[test]
    fn test_examples_by_role() {
        assert_eq!(example_prompts(true).len(), 7);
        assert_eq!(example_prompts(false)[0], "Mis compras del último mes");
    }
}
