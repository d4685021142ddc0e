//! Sales forecasts and prediction model management (`/api/dashboard/...`)

use chrono::Utc;
use contracts::domain::a007_prediction::{
    export_file_name, export_path, GeneratePredictionsRequest, ModelStatusResponse,
    PredictionFilter, PredictionsResponse, TrainingHistoryResponse, MODEL_HISTORY_PATH,
    MODEL_STATUS_PATH, MODEL_TRAIN_PATH, MODEL_UPDATE_PATH, PREDICTIONS_GENERATE_PATH,
    PREDICTIONS_PATH,
};
use contracts::shared::api::{decode, ApiError, SuccessCheck};
use contracts::shared::date_utils::today_iso;
use serde_json::Value;

use crate::shared::api_utils::{self, fetch_blob, get, post};
use crate::shared::export::download_bytes;

pub async fn generate_predictions(
    params: GeneratePredictionsRequest,
) -> Result<PredictionsResponse, ApiError> {
    let body = api_utils::send_json(
        post(PREDICTIONS_GENERATE_PATH),
        &params.normalized(),
        SuccessCheck::Required,
        "Error al generar predicciones",
    )
    .await?;
    decode(body)
}

pub async fn list_predictions(filter: &PredictionFilter) -> Result<PredictionsResponse, ApiError> {
    let url = filter.to_query().to_url(PREDICTIONS_PATH);
    let body = api_utils::send(get(&url), SuccessCheck::Required, "Error al obtener predicciones").await?;
    decode(body)
}

pub async fn model_status() -> Result<ModelStatusResponse, ApiError> {
    let body = api_utils::send(
        get(MODEL_STATUS_PATH),
        SuccessCheck::Required,
        "Error al obtener estado del modelo",
    )
    .await?;
    decode(body)
}

pub async fn train_model() -> Result<Value, ApiError> {
    api_utils::send(post(MODEL_TRAIN_PATH), SuccessCheck::Required, "Error al entrenar modelo").await
}

pub async fn update_model() -> Result<Value, ApiError> {
    api_utils::send(post(MODEL_UPDATE_PATH), SuccessCheck::Required, "Error al actualizar modelo").await
}

pub async fn training_history() -> Result<TrainingHistoryResponse, ApiError> {
    let body = api_utils::send(get(MODEL_HISTORY_PATH), SuccessCheck::Required, "Error al obtener historial")
        .await?;
    decode(body)
}

/// Download the forecast report as `predicciones_ia_<today>.{pdf|xlsx}`
pub async fn export_predictions(formato: &str) -> Result<(), ApiError> {
    let bytes = fetch_blob(&export_path(formato), |status, _| ApiError::Http {
        status,
        message: "Error al generar el reporte".to_string(),
    })
    .await?;
    download_bytes(&bytes, &export_file_name(formato, &today_iso(&Utc::now())))
}
