use contracts::domain::a001_product::{Product, ProductListResponse, PRODUCTS_PATH};
use contracts::shared::api::{decode, ApiError, SuccessCheck};

use crate::shared::api_utils::{self, get};

/// Public catalog (`{items: [...]}`)
pub async fn list_products() -> Result<Vec<Product>, ApiError> {
    let body = api_utils::send(
        get(PRODUCTS_PATH),
        SuccessCheck::StatusOnly,
        "No se pudo cargar el catálogo",
    )
    .await?;
    Ok(decode::<ProductListResponse>(body)?.items)
}
