use super::aggregate::{CouponDto, DISCOUNT_PERCENT};
use crate::domain::a004_offer::form::REQUIRED_FIELDS_MESSAGE;
use crate::shared::date_utils::{form_datetime_to_iso, to_form_datetime};
use chrono::{DateTime, Duration, Utc};

/// Editable coupon form, values as typed
#[derive(Debug, Clone, PartialEq)]
pub struct CouponForm {
    pub codigo: String,
    pub descripcion: String,
    pub tipo_descuento: String,
    pub valor_descuento: String,
    pub monto_minimo: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub usos_maximos: String,
    pub aplicable_a_todos: bool,
    pub categoria_id: Option<String>,
}

impl CouponForm {
    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            codigo: String::new(),
            descripcion: String::new(),
            tipo_descuento: DISCOUNT_PERCENT.into(),
            valor_descuento: "10".into(),
            monto_minimo: "0".into(),
            fecha_inicio: to_form_datetime(&now),
            fecha_fin: to_form_datetime(&(now + Duration::days(30))),
            usos_maximos: "100".into(),
            aplicable_a_todos: true,
            categoria_id: None,
        }
    }

    pub fn to_dto(&self) -> Result<CouponDto, String> {
        let valor = self.valor_descuento.trim().parse::<f64>().unwrap_or(0.0);
        if self.codigo.trim().is_empty() || valor == 0.0 {
            return Err(REQUIRED_FIELDS_MESSAGE.into());
        }
        let fecha_inicio = form_datetime_to_iso(&self.fecha_inicio)
            .ok_or("Fecha de inicio inválida")?;
        let fecha_fin = form_datetime_to_iso(&self.fecha_fin).ok_or("Fecha de fin inválida")?;

        Ok(CouponDto {
            codigo: self.codigo.trim().to_uppercase(),
            descripcion: self.descripcion.clone(),
            tipo_descuento: self.tipo_descuento.clone(),
            valor_descuento: valor,
            monto_minimo: self.monto_minimo.trim().parse().unwrap_or(0.0),
            fecha_inicio,
            fecha_fin,
            usos_maximos: self.usos_maximos.trim().parse().unwrap_or(100),
            aplicable_a_todos: self.aplicable_a_todos,
            categoria_id: self.categoria_id.clone().filter(|c| !c.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let f = CouponForm::new_at(now());
        assert_eq!(f.tipo_descuento, "porcentaje");
        assert_eq!(f.fecha_fin, "2024-02-09T12:00");
        assert!(f.aplicable_a_todos);
    }

    #[test]
    fn test_required_fields() {
        let mut f = CouponForm::new_at(now());
        assert_eq!(f.to_dto().unwrap_err(), REQUIRED_FIELDS_MESSAGE);
        f.codigo = "abc12345".into();
        f.valor_descuento = "".into();
        assert_eq!(f.to_dto().unwrap_err(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_dto_numbers() {
        let mut f = CouponForm::new_at(now());
        f.codigo = "abc12345".into();
        f.monto_minimo = "".into();
        f.usos_maximos = "x".into();
        let dto = f.to_dto().unwrap();
        assert_eq!(dto.codigo, "ABC12345");
        assert_eq!(dto.monto_minimo, 0.0);
        assert_eq!(dto.usos_maximos, 100);
        assert_eq!(dto.categoria_id, None);
    }
}
