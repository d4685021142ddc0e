use contracts::domain::a004_offer::{
    OfferDto, OfferFilter, OfferListResponse, OfferSuggestionsResponse, OFFERS_PATH,
    OFFER_SUGGESTIONS_PATH,
};
use contracts::shared::api::{decode, ApiError, SuccessCheck};
use serde_json::Value;

use crate::shared::api_utils::{self, get, post};

pub async fn list_offers(filter: &OfferFilter) -> Result<OfferListResponse, ApiError> {
    let url = filter.to_query().to_url(OFFERS_PATH);
    let body = api_utils::send(get(&url), SuccessCheck::StatusOnly, "Error al obtener ofertas").await?;
    decode(body)
}

/// Returns the raw body so the caller can show its `message`
pub async fn create_offer(dto: &OfferDto) -> Result<Value, ApiError> {
    api_utils::send_json(post(OFFERS_PATH), dto, SuccessCheck::StatusOnly, "Error al crear oferta").await
}

pub async fn ai_suggestions() -> Result<OfferSuggestionsResponse, ApiError> {
    let body = api_utils::send(
        get(OFFER_SUGGESTIONS_PATH),
        SuccessCheck::StatusOnly,
        "Error al obtener sugerencias",
    )
    .await?;
    decode(body)
}
