//! Query-string construction for GET endpoints

/// Builder that skips empty values, so unset filters never reach the URL
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair unless the value renders to an empty string
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `?a=1&b=2`, or an empty string when nothing was added
    pub fn build(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }

    /// Path with the query appended
    pub fn to_url(&self, path: &str) -> String {
        format!("{}{}", path, self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_dropped() {
        let q = QueryBuilder::new()
            .push("estado", "")
            .push("page", 1)
            .push_opt::<u32>("limite", None)
            .push_opt("tipo", Some("venta"));
        assert_eq!(q.build(), "?page=1&tipo=venta");
    }

    #[test]
    fn test_no_pairs_no_question_mark() {
        let q = QueryBuilder::new().push("a", "");
        assert!(q.is_empty());
        assert_eq!(q.to_url("/api/ventas/carrito/"), "/api/ventas/carrito/");
    }

    #[test]
    fn test_values_are_encoded() {
        let q = QueryBuilder::new().push("producto_nombre", "café & té");
        assert_eq!(q.build(), "?producto_nombre=caf%C3%A9%20%26%20t%C3%A9");
    }
}
