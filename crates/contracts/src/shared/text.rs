//! Label helpers for snake_case keys coming from the backend

/// Upper-cases the first letter of every space separated word
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `monto_total_vendido` -> `Monto Total Vendido`
pub fn humanize_key(key: &str) -> String {
    title_case(&key.replace('_', " "))
}

/// Replace only the first `_` before title-casing (`tarjeta_credito_visa`
/// -> `Tarjeta Credito_visa`)
pub fn humanize_first_segment(key: &str) -> String {
    title_case(&key.replacen('_', " ", 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("monto_total_vendido"), "Monto Total Vendido");
        assert_eq!(humanize_key("estado"), "Estado");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_humanize_first_segment() {
        assert_eq!(humanize_first_segment("mis_compras"), "Mis Compras");
        assert_eq!(humanize_first_segment("tarjeta_credito_visa"), "Tarjeta Credito_visa");
    }
}
