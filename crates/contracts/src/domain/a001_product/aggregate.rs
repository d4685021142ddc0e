use crate::shared::serde_utils::{f64_lenient, opt_f64_lenient, string_or_null};
use serde::{Deserialize, Serialize};

pub const PRODUCTS_PATH: &str = "/api/productos/";

/// Category chip that matches every product
pub const ALL_CATEGORIES: &str = "Todos";

/// Producto del catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(deserialize_with = "f64_lenient")]
    pub precio: f64,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub precio_oferta: Option<f64>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub imagen: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock.map(|s| s > 0).unwrap_or(true)
    }

    /// Price to charge: the offer price when one is active
    pub fn effective_price(&self) -> f64 {
        self.precio_oferta.unwrap_or(self.precio)
    }
}

/// Short product reference embedded in offers and suggestions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub items: Vec<Product>,
}

/// `Todos` followed by distinct non-empty categories in first-seen order
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for category in products.iter().filter_map(|p| p.categoria.as_deref()) {
        if !category.is_empty() && !result.iter().any(|c| c == category) {
            result.push(category.to_string());
        }
    }
    result
}

/// Case-insensitive search over "nombre categoria" plus category filter
pub fn filter_products<'a>(products: &'a [Product], search: &str, category: &str) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| {
            let haystack = format!("{} {}", p.nombre, p.categoria.as_deref().unwrap_or_default())
                .to_lowercase();
            let match_text = haystack.contains(&needle);
            let match_category =
                category == ALL_CATEGORIES || p.categoria.as_deref() == Some(category);
            match_text && match_category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<Product> {
        serde_json::from_value(json!([
            { "id": 1, "nombre": "Laptop Pro", "precio": "8500.00", "categoria": "Computación", "stock": 3 },
            { "id": 2, "nombre": "Mouse", "precio": 120, "categoria": "Accesorios", "stock": 0 },
            { "id": 3, "nombre": "Teclado", "precio": 250.5, "categoria": "Accesorios" },
            { "id": 4, "nombre": "Cable", "precio": 15, "categoria": "" }
        ]))
        .unwrap()
    }

    #[test]
    fn test_category_options() {
        assert_eq!(
            category_options(&catalog()),
            vec!["Todos", "Computación", "Accesorios"]
        );
    }

    #[test]
    fn test_filter_by_text_and_category() {
        let products = catalog();
        let ids = |v: Vec<&Product>| v.iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(ids(filter_products(&products, "", ALL_CATEGORIES)), vec![1, 2, 3, 4]);
        assert_eq!(ids(filter_products(&products, "ACCES", ALL_CATEGORIES)), vec![2, 3]);
        assert_eq!(ids(filter_products(&products, "mo", "Accesorios")), vec![2]);
        assert_eq!(ids(filter_products(&products, "laptop", "Accesorios")), Vec::<i64>::new());
    }

    #[test]
    fn test_stock_and_price() {
        let products = catalog();
        assert!(products[0].in_stock());
        assert!(!products[1].in_stock());
        assert!(products[2].in_stock());
        assert_eq!(products[0].effective_price(), 8500.0);
    }
}
