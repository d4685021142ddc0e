use super::aggregate::{OfferDto, ProductSuggestion, SeasonalOffer};
use crate::shared::date_utils::{form_datetime_to_iso, to_form_datetime};
use chrono::{DateTime, Duration, Utc};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Por favor completa todos los campos requeridos";

/// Estado editable del formulario de oferta (valores tal como en los inputs)
#[derive(Debug, Clone, PartialEq)]
pub struct OfferForm {
    pub nombre: String,
    pub descripcion: String,
    pub producto_id: Option<i64>,
    pub categoria_id: Option<String>,
    pub descuento_porcentaje: String,
    pub precio_oferta: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub estado: String,
    pub basada_en_ia: bool,
    pub razon_ia: String,
}

impl OfferForm {
    /// Empty form: 10 % for one week starting now
    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            nombre: String::new(),
            descripcion: String::new(),
            producto_id: None,
            categoria_id: None,
            descuento_porcentaje: "10".into(),
            precio_oferta: String::new(),
            fecha_inicio: to_form_datetime(&now),
            fecha_fin: to_form_datetime(&(now + Duration::days(7))),
            estado: "programada".into(),
            basada_en_ia: false,
            razon_ia: String::new(),
        }
    }

    pub fn from_suggestion(suggestion: &ProductSuggestion, now: DateTime<Utc>) -> Self {
        Self {
            nombre: format!("Oferta {}", suggestion.producto.nombre),
            descripcion: suggestion.razon.clone(),
            producto_id: Some(suggestion.producto.id),
            categoria_id: suggestion.categoria.as_ref().map(|c| c.id.clone()),
            descuento_porcentaje: suggestion.descuento_sugerido.to_string(),
            basada_en_ia: true,
            razon_ia: suggestion.razon.clone(),
            ..Self::new_at(now)
        }
    }

    /// Seasonal suggestions keep their own window (cut to minutes)
    pub fn from_seasonal(offer: &SeasonalOffer, now: DateTime<Utc>) -> Self {
        let base = Self::new_at(now);
        let cut = |s: &str, fallback: String| {
            if s.len() >= 16 {
                s.chars().take(16).collect()
            } else {
                fallback
            }
        };
        Self {
            nombre: offer.nombre.clone(),
            descripcion: offer.descripcion.clone(),
            descuento_porcentaje: offer.descuento_sugerido.to_string(),
            fecha_inicio: cut(&offer.fecha_sugerida_inicio, base.fecha_inicio.clone()),
            fecha_fin: cut(&offer.fecha_sugerida_fin, base.fecha_fin.clone()),
            basada_en_ia: true,
            razon_ia: offer.descripcion.clone(),
            ..base
        }
    }

    /// Validate and convert to the request body
    pub fn to_dto(&self) -> Result<OfferDto, String> {
        let descuento = self.descuento_porcentaje.trim().parse::<f64>().unwrap_or(0.0);
        if self.nombre.trim().is_empty() || descuento == 0.0 {
            return Err(REQUIRED_FIELDS_MESSAGE.into());
        }
        if !(0.0..=100.0).contains(&descuento) {
            return Err("El descuento debe estar entre 0 y 100".into());
        }

        let fecha_inicio = form_datetime_to_iso(&self.fecha_inicio)
            .ok_or("Fecha de inicio inválida")?;
        let fecha_fin = form_datetime_to_iso(&self.fecha_fin).ok_or("Fecha de fin inválida")?;
        if fecha_fin <= fecha_inicio {
            return Err("La fecha de fin debe ser posterior a la de inicio".into());
        }

        Ok(OfferDto {
            nombre: self.nombre.trim().to_string(),
            descripcion: self.descripcion.clone(),
            producto_id: self.producto_id,
            categoria_id: self.categoria_id.clone().filter(|c| !c.is_empty()),
            descuento_porcentaje: descuento,
            precio_oferta: self.precio_oferta.trim().parse::<f64>().ok(),
            fecha_inicio,
            fecha_fin,
            estado: self.estado.clone(),
            basada_en_ia: self.basada_en_ia,
            razon_ia: self.razon_ia.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductRef;
    use crate::shared::options::IdName;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let f = OfferForm::new_at(now());
        assert_eq!(f.fecha_inicio, "2024-10-15T09:30");
        assert_eq!(f.fecha_fin, "2024-10-22T09:30");
        assert_eq!(f.estado, "programada");
        assert_eq!(f.descuento_porcentaje, "10");
    }

    #[test]
    fn test_from_suggestion() {
        let s = ProductSuggestion {
            producto: ProductRef { id: 7, nombre: "Monitor".into() },
            categoria: Some(IdName { id: "3".into(), nombre: "Pantallas".into() }),
            descuento_sugerido: 15.0,
            razon: "Stock alto".into(),
        };
        let f = OfferForm::from_suggestion(&s, now());
        assert_eq!(f.nombre, "Oferta Monitor");
        assert_eq!(f.producto_id, Some(7));
        assert_eq!(f.categoria_id.as_deref(), Some("3"));
        assert_eq!(f.descuento_porcentaje, "15");
        assert!(f.basada_en_ia);
    }

    #[test]
    fn test_validation() {
        let mut f = OfferForm::new_at(now());
        assert_eq!(f.to_dto().unwrap_err(), REQUIRED_FIELDS_MESSAGE);

        f.nombre = "Black Friday".into();
        f.descuento_porcentaje = "0".into();
        assert_eq!(f.to_dto().unwrap_err(), REQUIRED_FIELDS_MESSAGE);

        f.descuento_porcentaje = "25".into();
        let dto = f.to_dto().unwrap();
        assert_eq!(dto.descuento_porcentaje, 25.0);
        assert_eq!(dto.precio_oferta, None);
        assert_eq!(dto.fecha_inicio, "2024-10-15T09:30:00+00:00");
    }

    #[test]
    fn test_seasonal_window() {
        let s = SeasonalOffer {
            nombre: "Navidad".into(),
            descripcion: "Temporada alta".into(),
            descuento_sugerido: 20.0,
            fecha_sugerida_inicio: "2024-12-01T00:00:00Z".into(),
            fecha_sugerida_fin: "".into(),
        };
        let f = OfferForm::from_seasonal(&s, now());
        assert_eq!(f.fecha_inicio, "2024-12-01T00:00");
        assert_eq!(f.fecha_fin, "2024-10-22T09:30");
    }
}
