use crate::domain::a001_product::ProductRef;
use crate::shared::options::IdName;
use crate::shared::query::QueryBuilder;
use crate::shared::serde_utils::{f64_lenient, opt_f64_lenient, string_or_null};
use serde::{Deserialize, Serialize};

pub const OFFERS_PATH: &str = "/api/productos/ofertas/";
pub const OFFER_SUGGESTIONS_PATH: &str = "/api/productos/ofertas/sugerir-ia/";

/// Oferta (descuento temporal sobre producto o categoría)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub producto: Option<ProductRef>,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub descuento_porcentaje: f64,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub precio_oferta: Option<f64>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha_inicio: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha_fin: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub estado: String,
    #[serde(default)]
    pub esta_activa: bool,
    #[serde(default)]
    pub basada_en_ia: bool,
}

impl Offer {
    /// "✓ Activa Ahora" while running, the raw state otherwise
    pub fn status_label(&self) -> String {
        if self.esta_activa {
            "✓ Activa Ahora".to_string()
        } else {
            self.estado.clone()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferListResponse {
    #[serde(default)]
    pub ofertas: Vec<Offer>,
}

#[derive(Debug, Clone, Default)]
pub struct OfferFilter {
    pub estado: Option<String>,
    pub activas: Option<bool>,
}

impl OfferFilter {
    pub fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push_opt("estado", self.estado.as_deref())
            .push_opt("activas", self.activas.filter(|a| *a))
    }
}

/// Sugerencia de la IA para un producto concreto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSuggestion {
    pub producto: ProductRef,
    #[serde(default)]
    pub categoria: Option<IdName>,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub descuento_sugerido: f64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub razon: String,
}

/// Oferta de temporada sugerida (sin producto asociado)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalOffer {
    pub nombre: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub descuento_sugerido: f64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha_sugerida_inicio: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha_sugerida_fin: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferSuggestionsResponse {
    #[serde(default)]
    pub sugerencias_productos: Vec<ProductSuggestion>,
    #[serde(default)]
    pub ofertas_temporada: Vec<SeasonalOffer>,
}

/// Body of `POST /api/productos/ofertas/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferDto {
    pub nombre: String,
    pub descripcion: String,
    pub producto_id: Option<i64>,
    pub categoria_id: Option<String>,
    pub descuento_porcentaje: f64,
    pub precio_oferta: Option<f64>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub estado: String,
    pub basada_en_ia: bool,
    pub razon_ia: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_offer_filter_query() {
        assert_eq!(OfferFilter::default().to_query().build(), "");
        let f = OfferFilter {
            estado: Some("activa".into()),
            activas: Some(true),
        };
        assert_eq!(f.to_query().build(), "?estado=activa&activas=true");
        let f = OfferFilter {
            estado: None,
            activas: Some(false),
        };
        assert_eq!(f.to_query().build(), "");
    }

    #[test]
    fn test_suggestions_parse() {
        let resp: OfferSuggestionsResponse = serde_json::from_value(json!({
            "sugerencias_productos": [{
                "producto": { "id": 4, "nombre": "Teclado" },
                "categoria": { "id": 2, "nombre": "Accesorios" },
                "descuento_sugerido": "15",
                "razon": "Baja rotación"
            }],
            "ofertas_temporada": [{
                "nombre": "Navidad",
                "descuento_sugerido": 20,
                "fecha_sugerida_inicio": "2024-12-01T00:00:00Z",
                "fecha_sugerida_fin": "2024-12-25T23:59:00Z"
            }]
        }))
        .unwrap();
        assert_eq!(resp.sugerencias_productos[0].descuento_sugerido, 15.0);
        assert_eq!(resp.ofertas_temporada[0].descripcion, "");
    }
}
