use contracts::domain::a005_coupon::{
    CouponDto, CouponFilter, CouponListResponse, CouponValidation, ValidateCouponRequest,
    COUPONS_PATH, COUPON_VALIDATE_PATH,
};
use contracts::shared::api::{decode, ApiError, SuccessCheck};
use serde_json::Value;

use crate::shared::api_utils::{self, get, post};

pub async fn list_coupons(filter: &CouponFilter) -> Result<CouponListResponse, ApiError> {
    let url = filter.to_query().to_url(COUPONS_PATH);
    let body = api_utils::send(get(&url), SuccessCheck::StatusOnly, "Error al obtener cupones").await?;
    decode(body)
}

pub async fn create_coupon(dto: &CouponDto) -> Result<Value, ApiError> {
    api_utils::send_json(post(COUPONS_PATH), dto, SuccessCheck::StatusOnly, "Error al crear cupón").await
}

/// Check a code against the current cart total; an invalid code is not an error
pub async fn validate_coupon(codigo: &str, cart_total: f64) -> Result<CouponValidation, ApiError> {
    let request = ValidateCouponRequest {
        codigo: codigo.to_string(),
        total_carrito: cart_total,
    };
    let body = api_utils::send_json(
        post(COUPON_VALIDATE_PATH),
        &request,
        SuccessCheck::StatusOnly,
        "Error al validar cupón",
    )
    .await?;
    decode(body)
}
