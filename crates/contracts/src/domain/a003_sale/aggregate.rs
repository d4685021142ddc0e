use crate::shared::options::FilterOptions;
use crate::shared::serde_utils::{f64_lenient, string_or_null};
use crate::shared::text::humanize_first_segment;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const HISTORY_PATH: &str = "/api/ventas/historial/";
pub const HISTORY_OPTIONS_PATH: &str = "/api/ventas/historial/opciones-filtros/";
pub const HISTORY_AGGREGATED_PATH: &str = "/api/ventas/historial/agregado/";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
    #[serde(default)]
    pub cantidad: i64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub precio_unitario: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub subtotal: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub existe: bool,
    #[serde(default)]
    pub numero: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnlinePayment {
    #[serde(default)]
    pub existe: bool,
    #[serde(default, deserialize_with = "string_or_null")]
    pub estado: String,
    #[serde(default)]
    pub referencia: Option<String>,
}

/// Venta (o compra, desde la vista del cliente)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha: String,
    #[serde(default)]
    pub cliente: Option<CustomerRef>,
    #[serde(deserialize_with = "f64_lenient")]
    pub total: f64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub estado: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub metodo_pago: String,
    #[serde(default)]
    pub productos_count: i64,
    #[serde(default)]
    pub productos: Vec<SaleLine>,
    #[serde(default)]
    pub direccion_entrega: Option<String>,
    #[serde(default)]
    pub comprobante: Option<Receipt>,
    #[serde(default)]
    pub pago_online: Option<OnlinePayment>,
}

impl SaleRecord {
    pub fn has_receipt(&self) -> bool {
        self.comprobante.as_ref().map(|c| c.existe).unwrap_or(false)
    }

    pub fn has_online_payment(&self) -> bool {
        self.pago_online.as_ref().map(|p| p.existe).unwrap_or(false)
    }

    /// "1 producto" / "3 productos"
    pub fn products_label(&self) -> String {
        let noun = if self.productos_count == 1 { "producto" } else { "productos" };
        format!("{} {}", self.productos_count, noun)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_ventas: u64,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

impl Pagination {
    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }

    /// "Página 2 de 5 (87 registros)"
    pub fn summary(&self) -> String {
        let noun = if self.total_ventas == 1 { "registro" } else { "registros" };
        format!(
            "Página {} de {} ({} {})",
            self.page, self.total_pages, self.total_ventas, noun
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleStats {
    #[serde(default)]
    pub total_ventas: u64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_monto: f64,
    #[serde(default)]
    pub ventas_completadas: u64,
    #[serde(default)]
    pub ventas_pendientes: u64,
    #[serde(default)]
    pub ventas_canceladas: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleHistoryResponse {
    #[serde(default)]
    pub ventas: Vec<SaleRecord>,
    #[serde(default)]
    pub paginacion: Option<Pagination>,
    #[serde(default)]
    pub estadisticas: Option<SaleStats>,
}

/// `GET /api/ventas/historial/agregado/`; rows are normalized by consumers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregatedHistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub historial: Vec<Value>,
}

/// Label of a payment method: option label when known, otherwise the key
/// with its first `_` replaced and words capitalised
pub fn payment_method_label(method: &str, options: &FilterOptions) -> String {
    options
        .payment_label(method)
        .map(str::to_string)
        .unwrap_or_else(|| humanize_first_segment(method))
}

/// File name of a downloaded receipt
pub fn receipt_file_name(sale_id: i64) -> String {
    format!("comprobante_{}.pdf", sale_id)
}

pub fn receipt_path(sale_id: i64) -> String {
    format!("/api/ventas/comprobantes/{}/pdf/", sale_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::ValueLabel;
    use serde_json::json;

    #[test]
    fn test_payment_method_label() {
        let options = FilterOptions {
            metodos_pago: vec![ValueLabel {
                value: "qr".into(),
                label: "Pago QR".into(),
            }],
            ..Default::default()
        };
        assert_eq!(payment_method_label("qr", &options), "Pago QR");
        assert_eq!(payment_method_label("tarjeta_credito", &options), "Tarjeta Credito");
    }

    #[test]
    fn test_history_response() {
        let resp: SaleHistoryResponse = serde_json::from_value(json!({
            "ventas": [{
                "id": 12,
                "fecha": "2024-10-15T14:02:26Z",
                "cliente": { "nombre": "Ana", "email": "ana@correo.bo" },
                "total": "350.00",
                "estado": "completada",
                "metodo_pago": "efectivo",
                "productos_count": 1,
                "productos": [{ "nombre": "Mouse", "cantidad": 1, "precio_unitario": 350, "subtotal": 350 }],
                "comprobante": { "existe": true, "numero": "F-0012" }
            }],
            "paginacion": { "page": 1, "total_pages": 3, "total_ventas": 41, "has_next": true, "has_previous": false },
            "estadisticas": { "total_ventas": 41, "total_monto": 9000.5, "ventas_completadas": 30, "ventas_pendientes": 10, "ventas_canceladas": 1 }
        }))
        .unwrap();

        let sale = &resp.ventas[0];
        assert!(sale.has_receipt());
        assert!(!sale.has_online_payment());
        assert_eq!(sale.products_label(), "1 producto");
        let pages = resp.paginacion.unwrap();
        assert!(pages.is_paged());
        assert_eq!(pages.summary(), "Página 1 de 3 (41 registros)");
    }

    #[test]
    fn test_sale_with_null_text_fields() {
        let sale: SaleRecord = serde_json::from_value(json!({
            "id": 7,
            "fecha": null,
            "cliente": { "nombre": "Luis", "email": null },
            "total": 120,
            "estado": "pendiente",
            "metodo_pago": null,
            "productos": [{ "nombre": null, "cantidad": 2, "precio_unitario": 60, "subtotal": 120 }]
        }))
        .unwrap();

        assert_eq!(sale.metodo_pago, "");
        assert_eq!(sale.fecha, "");
        assert_eq!(sale.estado, "pendiente");
        assert_eq!(sale.cliente.unwrap().email, "");
        assert_eq!(sale.productos[0].nombre, "");
    }
}
