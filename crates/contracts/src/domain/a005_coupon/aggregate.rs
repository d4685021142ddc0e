use crate::shared::number_format::CURRENCY_PREFIX;
use crate::shared::query::QueryBuilder;
use crate::shared::serde_utils::{f64_lenient, string_or_null};
use serde::{Deserialize, Serialize};

pub const COUPONS_PATH: &str = "/api/productos/cupones/";
pub const COUPON_VALIDATE_PATH: &str = "/api/productos/cupones/validar/";

pub const DISCOUNT_PERCENT: &str = "porcentaje";
pub const DISCOUNT_FIXED: &str = "monto_fijo";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: i64,
    pub codigo: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub tipo_descuento: String,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub valor_descuento: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub monto_minimo: f64,
    #[serde(default)]
    pub usos_actuales: i64,
    #[serde(default)]
    pub usos_maximos: i64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha_inicio: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha_fin: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub estado: String,
    #[serde(default)]
    pub esta_activo: bool,
}

impl Coupon {
    /// "15% OFF" or "Bs. 20 OFF"
    pub fn discount_label(&self) -> String {
        if self.tipo_descuento == DISCOUNT_PERCENT {
            format!("{}% OFF", self.valor_descuento)
        } else {
            format!("{} {} OFF", CURRENCY_PREFIX, self.valor_descuento)
        }
    }

    pub fn usage_label(&self) -> String {
        format!("{} / {}", self.usos_actuales, self.usos_maximos)
    }

    pub fn status_label(&self) -> String {
        if self.esta_activo {
            "✓ Activo Ahora".to_string()
        } else {
            self.estado.clone()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponListResponse {
    #[serde(default)]
    pub cupones: Vec<Coupon>,
}

#[derive(Debug, Clone, Default)]
pub struct CouponFilter {
    pub estado: Option<String>,
    pub activos: Option<bool>,
}

impl CouponFilter {
    pub fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push_opt("estado", self.estado.as_deref())
            .push_opt("activos", self.activos.filter(|a| *a))
    }
}

/// Body of `POST /api/productos/cupones/validar/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateCouponRequest {
    pub codigo: String,
    pub total_carrito: f64,
}

/// Validation result: only `success` and `message` are interpreted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponValidation {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cupon: Option<serde_json::Value>,
}

impl CouponValidation {
    pub fn rejection_message(&self) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Cupón no válido".to_string())
    }
}

/// Body of `POST /api/productos/cupones/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponDto {
    pub codigo: String,
    pub descripcion: String,
    pub tipo_descuento: String,
    pub valor_descuento: f64,
    pub monto_minimo: f64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub usos_maximos: i64,
    pub aplicable_a_todos: bool,
    pub categoria_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coupon(tipo: &str, valor: f64) -> Coupon {
        serde_json::from_value(json!({
            "id": 1,
            "codigo": "VERANO24",
            "tipo_descuento": tipo,
            "valor_descuento": valor,
            "usos_actuales": 3,
            "usos_maximos": 100,
            "estado": "activo",
            "esta_activo": false
        }))
        .unwrap()
    }

    #[test]
    fn test_discount_label() {
        assert_eq!(coupon("porcentaje", 15.0).discount_label(), "15% OFF");
        assert_eq!(coupon("monto_fijo", 20.0).discount_label(), "Bs. 20 OFF");
        assert_eq!(coupon("porcentaje", 12.5).discount_label(), "12.5% OFF");
    }

    #[test]
    fn test_labels() {
        let c = coupon("porcentaje", 10.0);
        assert_eq!(c.usage_label(), "3 / 100");
        assert_eq!(c.status_label(), "activo");
        assert_eq!(c.monto_minimo, 0.0);
    }

    #[test]
    fn test_validation_message() {
        let v: CouponValidation = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(v.rejection_message(), "Cupón no válido");
        let v: CouponValidation =
            serde_json::from_value(json!({ "success": false, "message": "Cupón expirado" })).unwrap();
        assert_eq!(v.rejection_message(), "Cupón expirado");
    }

    #[test]
    fn test_filter_query() {
        let f = CouponFilter { estado: None, activos: Some(true) };
        assert_eq!(f.to_query().to_url(COUPONS_PATH), "/api/productos/cupones/?activos=true");
    }
}
