use contracts::domain::a003_sale::{
    receipt_file_name, receipt_path, AggregatedHistoryResponse, SaleFilter, SaleHistoryResponse,
    HISTORY_AGGREGATED_PATH, HISTORY_OPTIONS_PATH, HISTORY_PATH,
};
use contracts::shared::api::{body_message, decode, ApiError, SuccessCheck};
use contracts::shared::options::FilterOptions;
use contracts::shared::query::QueryBuilder;

use crate::shared::api_utils::{self, fetch_blob, get};
use crate::shared::export::download_bytes;

/// Paged sales (all sales for admins, own purchases for clients)
pub async fn sales_history(filter: &SaleFilter) -> Result<SaleHistoryResponse, ApiError> {
    let url = filter.to_query().to_url(HISTORY_PATH);
    let body = api_utils::send(get(&url), SuccessCheck::Required, "Error al cargar historial").await?;
    decode(body)
}

pub async fn history_filter_options() -> Result<FilterOptions, ApiError> {
    let body = api_utils::send(
        get(HISTORY_OPTIONS_PATH),
        SuccessCheck::StatusOnly,
        "Error al cargar opciones de filtros",
    )
    .await?;
    decode(body)
}

/// Totals grouped by `agrupar_por` (e.g. `mes`) over `periodo`
pub async fn aggregated_history(
    agrupar_por: &str,
    periodo: &str,
) -> Result<AggregatedHistoryResponse, ApiError> {
    let url = QueryBuilder::new()
        .push("agrupar_por", agrupar_por)
        .push("periodo", periodo)
        .to_url(HISTORY_AGGREGATED_PATH);
    let body = api_utils::send(
        get(&url),
        SuccessCheck::Required,
        "Error al obtener historial agregado",
    )
    .await?;
    decode(body)
}

/// Fetch the receipt PDF and save it as `comprobante_<id>.pdf`
pub async fn download_receipt(venta_id: i64) -> Result<(), ApiError> {
    let bytes = fetch_blob(&receipt_path(venta_id), |status, body| ApiError::Http {
        status,
        message: body_message(body)
            .unwrap_or("Error al descargar comprobante")
            .to_string(),
    })
    .await?;
    download_bytes(&bytes, &receipt_file_name(venta_id))
}
