//! Natural-language reports (`/api/reportes/...`)

use contracts::dashboards::d401_dynamic_report::{
    download_error, download_file_name, download_path, request_body, request_error,
    ReportFilters, ReportFormat, ReportListItem, ReportOrigin, ReportRecord, SmartFiltersRequest,
    REPORT_FILTER_OPTIONS_PATH, REPORT_LIST_PATH, REPORT_REQUEST_PATH, REPORT_SMART_FILTERS_PATH,
};
use contracts::shared::api::{check_response, decode, decode_field, ApiError, SuccessCheck};
use contracts::shared::options::FilterOptions;
use serde_json::Value;

use crate::shared::api_utils::{self, fetch_blob, get, post};
use crate::shared::export::download_bytes;

/// Ask the report service for a report; returns the generated `reporte`
pub async fn request_report(
    texto: &str,
    origen: ReportOrigin,
    filtros: &ReportFilters,
) -> Result<ReportRecord, ApiError> {
    let body = request_body(texto, origen, filtros.applicable());
    let (status, body) = api_utils::send_json_raw(post(REPORT_REQUEST_PATH), &body).await?;
    if !(200..300).contains(&status) {
        return Err(request_error(status, &body));
    }
    check_response(status, &body, SuccessCheck::Required, "Error al solicitar reporte")?;
    decode_field(body, "reporte")
}

/// Filter suggestions for a report type (`sugerencias`)
pub async fn smart_filters(tipo_reporte: &str) -> Result<Value, ApiError> {
    let request = SmartFiltersRequest {
        tipo_reporte: tipo_reporte.to_string(),
    };
    let body = api_utils::send_json(
        post(REPORT_SMART_FILTERS_PATH),
        &request,
        SuccessCheck::Required,
        "Error al obtener filtros",
    )
    .await?;
    Ok(body.get("sugerencias").cloned().unwrap_or(Value::Null))
}

pub async fn list_reports() -> Result<Vec<ReportListItem>, ApiError> {
    let body = api_utils::send(get(REPORT_LIST_PATH), SuccessCheck::Required, "Error al listar reportes").await?;
    decode_field(body, "reportes")
}

pub async fn report_filter_options() -> Result<FilterOptions, ApiError> {
    let body = api_utils::send(
        get(REPORT_FILTER_OPTIONS_PATH),
        SuccessCheck::Required,
        "Error al obtener opciones de filtros",
    )
    .await?;
    decode(body)
}

/// Download a stored report as `reporte_<id>.{pdf|xlsx}`
pub async fn download_report(report_id: i64, format: ReportFormat) -> Result<(), ApiError> {
    let bytes = fetch_blob(&download_path(report_id, format), download_error).await?;
    download_bytes(&bytes, &download_file_name(report_id, format))
}
