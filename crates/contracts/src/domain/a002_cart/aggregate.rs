use crate::shared::serde_utils::{f64_lenient, string_or_null};
use serde::{Deserialize, Serialize};

pub const CART_PATH: &str = "/api/ventas/carrito/";
pub const CART_MANAGEMENT_PATH: &str = "/api/ventas/carrito/management/";
pub const CHECKOUT_PATH: &str = "/api/ventas/checkout/";

/// Позиция корзины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    #[serde(default)]
    pub producto_id: Option<i64>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
    pub cantidad: i64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub precio_unitario: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub subtotal: f64,
    #[serde(default)]
    pub guardado_para_despues: bool,
}

/// Payload of `GET /api/ventas/carrito/` (`data` field)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_items: i64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub descuento: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total: f64,
    #[serde(default)]
    pub codigo_descuento: Option<String>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.active_items().next().is_none()
    }

    /// Items that will be charged at checkout
    pub fn active_items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|i| !i.guardado_para_despues)
    }

    pub fn saved_items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|i| i.guardado_para_despues)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    pub producto_id: i64,
    pub cantidad: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub item_id: i64,
    pub cantidad: i64,
}

/// Body of `POST /api/ventas/carrito/management/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CartAction {
    Clear,
    Merge { carrito_origen_id: i64 },
    SaveForLater { item_id: i64 },
    ApplyDiscount { codigo_descuento: String },
}

impl CartAction {
    /// Message used when the backend gives none
    pub fn fallback_message(&self) -> &'static str {
        match self {
            CartAction::Clear => "No se pudo limpiar el carrito",
            CartAction::Merge { .. } => "No se pudo fusionar el carrito",
            CartAction::SaveForLater { .. } => "No se pudo guardar para más tarde",
            CartAction::ApplyDiscount { .. } => "No se pudo aplicar el descuento",
        }
    }
}

/// Datos de compra enviados al checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub metodo_pago: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion_entrega: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_descuento: Option<String>,
}

impl CheckoutRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.metodo_pago.trim().is_empty() {
            return Err("Selecciona un método de pago".into());
        }
        Ok(())
    }
}

/// Generic mutation response (`success`, `message`, optional `data`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartMutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Payment methods offered at checkout
pub const PAYMENT_METHODS: [(&str, &str); 4] = [
    ("efectivo", "Efectivo"),
    ("tarjeta", "Tarjeta"),
    ("transferencia", "Transferencia"),
    ("qr", "Pago QR"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_serialization() {
        assert_eq!(serde_json::to_value(CartAction::Clear).unwrap(), json!({ "action": "clear" }));
        assert_eq!(
            serde_json::to_value(CartAction::Merge { carrito_origen_id: 9 }).unwrap(),
            json!({ "action": "merge", "carrito_origen_id": 9 })
        );
        assert_eq!(
            serde_json::to_value(CartAction::SaveForLater { item_id: 3 }).unwrap(),
            json!({ "action": "save_for_later", "item_id": 3 })
        );
        assert_eq!(
            serde_json::to_value(CartAction::ApplyDiscount { codigo_descuento: "PROMO10".into() }).unwrap(),
            json!({ "action": "apply_discount", "codigo_descuento": "PROMO10" })
        );
    }

    #[test]
    fn test_cart_defaults_and_saved_items() {
        let cart: Cart = serde_json::from_value(json!({
            "items": [
                { "id": 1, "nombre": "Mouse", "cantidad": 2, "precio_unitario": "120.00", "subtotal": "240.00" },
                { "id": 2, "nombre": "Cable", "cantidad": 1, "guardado_para_despues": true }
            ],
            "total_items": 3,
            "total": "240.00"
        }))
        .unwrap();
        assert_eq!(cart.active_items().count(), 1);
        assert_eq!(cart.saved_items().count(), 1);
        assert_eq!(cart.total, 240.0);
        assert!(!cart.is_empty());
        assert!(Cart::default().is_empty());
    }

    #[test]
    fn test_checkout_skips_empty_optionals() {
        let req = CheckoutRequest {
            metodo_pago: "efectivo".into(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "metodo_pago": "efectivo" }));
        assert!(CheckoutRequest::default().validate().is_err());
    }
}
