use crate::shared::query::QueryBuilder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Filtros del historial de ventas; strings vacíos = sin filtro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleFilter {
    pub fecha_desde: String,
    pub fecha_hasta: String,
    pub estado: String,
    pub metodo_pago: String,
    pub cliente_id: String,
    pub producto_id: String,
    pub producto_nombre: String,
    pub categoria_id: String,
    pub page: u32,
    pub page_size: u32,
}

impl Default for SaleFilter {
    fn default() -> Self {
        Self {
            fecha_desde: String::new(),
            fecha_hasta: String::new(),
            estado: String::new(),
            metodo_pago: String::new(),
            cliente_id: String::new(),
            producto_id: String::new(),
            producto_nombre: String::new(),
            categoria_id: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SaleFilter {
    /// Set a filter field by its form name; any change goes back to page 1.
    /// Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "fecha_desde" => &mut self.fecha_desde,
            "fecha_hasta" => &mut self.fecha_hasta,
            "estado" => &mut self.estado,
            "metodo_pago" => &mut self.metodo_pago,
            "cliente_id" => &mut self.cliente_id,
            "producto_id" => &mut self.producto_id,
            "producto_nombre" => &mut self.producto_nombre,
            "categoria_id" => &mut self.categoria_id,
            _ => return,
        };
        *slot = value;
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push("fecha_desde", &self.fecha_desde)
            .push("fecha_hasta", &self.fecha_hasta)
            .push("estado", &self.estado)
            .push("metodo_pago", &self.metodo_pago)
            .push("cliente_id", &self.cliente_id)
            .push("producto_id", &self.producto_id)
            .push("producto_nombre", &self.producto_nombre)
            .push("categoria_id", &self.categoria_id)
            .push("page", self.page)
            .push("page_size", self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        assert_eq!(SaleFilter::default().to_query().build(), "?page=1&page_size=20");
    }

    #[test]
    fn test_change_resets_page() {
        let mut f = SaleFilter::default();
        f.go_to_page(4);
        f.set_field("estado", "pendiente".into());
        assert_eq!(f.page, 1);
        assert_eq!(f.to_query().build(), "?estado=pendiente&page=1&page_size=20");
    }

    #[test]
    fn test_unknown_field_ignored() {
        let mut f = SaleFilter::default();
        f.go_to_page(2);
        f.set_field("nope", "x".into());
        assert_eq!(f, SaleFilter { page: 2, ..Default::default() });
    }
}
