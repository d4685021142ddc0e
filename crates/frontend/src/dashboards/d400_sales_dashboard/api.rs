use chrono::Utc;
use contracts::dashboards::d400_sales_dashboard::{
    export_file_name, export_path, DashboardPeriod, DashboardStatsResponse, DASHBOARD_STATS_PATH,
};
use contracts::shared::api::{check_response, decode, ApiError, SuccessCheck};
use contracts::shared::date_utils::today_iso;

use crate::shared::api_utils::{fetch_blob, get_with_status_text};
use crate::shared::export::download_bytes;

const STATS_FALLBACK: &str = "Error al obtener estadísticas";

/// Получить метрики, помесячную серию и топ товаров
pub async fn dashboard_stats() -> Result<DashboardStatsResponse, ApiError> {
    let body = get_with_status_text(DASHBOARD_STATS_PATH, STATS_FALLBACK).await?;
    check_response(200, &body, SuccessCheck::Required, STATS_FALLBACK)?;
    decode(body)
}

/// Скачать отчёт за выбранный период (`pdf` или `excel`)
pub async fn export_dashboard(formato: &str, period: DashboardPeriod) -> Result<(), ApiError> {
    let bytes = fetch_blob(&export_path(formato, period), |status, _| ApiError::Http {
        status,
        message: "Error al generar el reporte".to_string(),
    })
    .await?;
    download_bytes(&bytes, &export_file_name(formato, &today_iso(&Utc::now())))
}
