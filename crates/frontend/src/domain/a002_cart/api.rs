//! Cart and checkout endpoints (`/api/ventas/carrito/`, `/api/ventas/checkout/`)

use contracts::domain::a002_cart::{
    AddCartItemRequest, Cart, CartAction, CartMutationResponse, CheckoutRequest,
    UpdateCartItemRequest, CART_MANAGEMENT_PATH, CART_PATH, CHECKOUT_PATH,
};
use contracts::shared::api::{decode, decode_field, ApiError, SuccessCheck};
use contracts::shared::query::QueryBuilder;

use crate::domain::a005_coupon::api as coupon_api;
use crate::shared::api_utils::{self, delete, get, post, put};

pub async fn get_cart() -> Result<Cart, ApiError> {
    let body = api_utils::send(get(CART_PATH), SuccessCheck::Required, "No se pudo obtener el carrito")
        .await?;
    decode_field(body, "data")
}

pub async fn add_to_cart(producto_id: i64, cantidad: i64) -> Result<CartMutationResponse, ApiError> {
    let request = AddCartItemRequest { producto_id, cantidad };
    let body = api_utils::send_json(
        post(CART_PATH),
        &request,
        SuccessCheck::Required,
        "No se pudo agregar al carrito",
    )
    .await?;
    decode(body)
}

pub async fn update_cart_item(item_id: i64, cantidad: i64) -> Result<CartMutationResponse, ApiError> {
    let request = UpdateCartItemRequest { item_id, cantidad };
    let body = api_utils::send_json(
        put(CART_PATH),
        &request,
        SuccessCheck::Required,
        "No se pudo actualizar el carrito",
    )
    .await?;
    decode(body)
}

pub async fn remove_from_cart(item_id: i64) -> Result<CartMutationResponse, ApiError> {
    let url = QueryBuilder::new().push("item_id", item_id).to_url(CART_PATH);
    let body = api_utils::send(delete(&url), SuccessCheck::Required, "No se pudo eliminar del carrito")
        .await?;
    decode(body)
}

/// `clear`, `merge`, `save_for_later` and `apply_discount`
pub async fn manage_cart(action: CartAction) -> Result<CartMutationResponse, ApiError> {
    let fallback = action.fallback_message();
    let body = api_utils::send_json(
        post(CART_MANAGEMENT_PATH),
        &action,
        SuccessCheck::Required,
        fallback,
    )
    .await?;
    decode(body)
}

pub async fn clear_cart() -> Result<CartMutationResponse, ApiError> {
    manage_cart(CartAction::Clear).await
}

pub async fn merge_carts(carrito_origen_id: i64) -> Result<CartMutationResponse, ApiError> {
    manage_cart(CartAction::Merge { carrito_origen_id }).await
}

pub async fn save_for_later(item_id: i64) -> Result<CartMutationResponse, ApiError> {
    manage_cart(CartAction::SaveForLater { item_id }).await
}

/// Validate the coupon against the cart total, then apply it
pub async fn apply_discount(codigo: &str, cart_total: f64) -> Result<CartMutationResponse, ApiError> {
    let validation = coupon_api::validate_coupon(codigo, cart_total).await?;
    if !validation.success {
        return Err(ApiError::Rejected(validation.rejection_message()));
    }
    manage_cart(CartAction::ApplyDiscount {
        codigo_descuento: codigo.to_string(),
    })
    .await
}

pub async fn checkout(data: &CheckoutRequest) -> Result<CartMutationResponse, ApiError> {
    let body = api_utils::send_json(
        post(CHECKOUT_PATH),
        data,
        SuccessCheck::Required,
        "Error al realizar compra",
    )
    .await?;
    decode(body)
}
