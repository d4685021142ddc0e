//! Value formatting for report tables, summaries and structured fields

use crate::shared::date_utils::{format_datetime_es, parse_timestamp};
use crate::shared::number_format::{format_int, format_locale, format_number_with_decimals, CURRENCY_PREFIX};
use serde_json::Value;

const MONEY_CELL_HINTS: [&str; 4] = ["precio", "total", "monto", "compra"];
const MONEY_SUMMARY_HINTS: [&str; 4] = ["total", "monto", "promedio", "compra"];

fn mentions_any(key: &str, hints: &[&str]) -> bool {
    hints.iter().any(|h| key.contains(h))
}

/// Truthiness of a JSON value the way the report service's clients see it
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Arrays and objects; `null` counts as a scalar
pub fn is_composite(value: &Value) -> bool {
    value.is_array() || value.is_object()
}

fn integral(f: f64) -> bool {
    f.fract() == 0.0
}

/// Plain number rendering: `5`, `1.5`
pub fn number_to_string(f: f64) -> String {
    if integral(f) && f.abs() < 9.0e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

/// Plain string conversion (`null`, `true`, `12.5`, text as is)
pub fn plain_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map(number_to_string).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        other => pretty_json(other),
    }
}

/// Two-space indented JSON
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Array elements joined with `, ` (nulls render empty)
fn join_list(items: &[Value]) -> String {
    items
        .iter()
        .map(|v| match v {
            Value::Null => String::new(),
            Value::Array(inner) => inner.iter().map(plain_string).collect::<Vec<_>>().join(","),
            Value::Object(_) => "[object Object]".to_string(),
            other => plain_string(other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_date_cell(value: &Value, key: &str) -> Option<String> {
    if !(key.contains("fecha") || key.contains("date")) {
        return None;
    }
    let text = value.as_str()?;
    if !(text.contains('T') || text.contains('-')) {
        return None;
    }
    parse_timestamp(text).map(|dt| format_datetime_es(&dt))
}

/// Table cell text for `value` under column `key`.
///
/// A missing value (`None`) and `null` both render as `N/A`.
pub fn format_cell(value: Option<&Value>, key: &str) -> String {
    let value = match value {
        None | Some(Value::Null) => return "N/A".to_string(),
        Some(v) => v,
    };

    if let Some(date) = format_date_cell(value, key) {
        return date;
    }

    match value {
        Value::Array(items) => {
            if items.is_empty() {
                "Ninguno".to_string()
            } else if items[0].is_object() || items[0].is_array() || items[0].is_null() {
                let noun = if key == "productos" { "producto(s)" } else { "item(s)" };
                format!("{} {}", items.len(), noun)
            } else {
                join_list(items)
            }
        }
        Value::Object(map) => {
            let nombre = map.get("nombre").filter(|v| is_truthy(v));
            match nombre {
                Some(nombre) if key == "cliente" => {
                    let nombre = plain_string(nombre);
                    match map.get("email").filter(|v| is_truthy(v)) {
                        Some(email) => format!("{} ({})", nombre, plain_string(email)),
                        None => nombre,
                    }
                }
                _ => pretty_json(value),
            }
        }
        Value::Bool(b) => (if *b { "Sí" } else { "No" }).to_string(),
        Value::Number(n) => {
            let f = n.as_f64().unwrap_or(0.0);
            if !integral(f) {
                if mentions_any(key, &MONEY_CELL_HINTS) {
                    format!("{} {}", CURRENCY_PREFIX, format_number_with_decimals(f, 2))
                } else {
                    format!("{:.2}", f)
                }
            } else {
                format_locale(f)
            }
        }
        Value::String(s) => s.clone(),
        Value::Null => "N/A".to_string(),
    }
}

/// Summary card value; `key` is the field name before any `_formateado`
/// substitution
pub fn format_summary_value(value: &Value, key: &str) -> String {
    match value.as_f64() {
        Some(f) if value.is_number() && !integral(f) => {
            if mentions_any(key, &MONEY_SUMMARY_HINTS) {
                format!("{} {:.2}", CURRENCY_PREFIX, f)
            } else {
                format!("{:.2}", f)
            }
        }
        Some(f) if value.is_number() => {
            if f.abs() < 9.0e15 {
                format_int(f as i64)
            } else {
                format_locale(f)
            }
        }
        _ => plain_string(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_missing() {
        assert_eq!(format_cell(None, "total"), "N/A");
        assert_eq!(format_cell(Some(&Value::Null), "total"), "N/A");
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_cell(Some(&json!("2024-10-15T14:02:00Z")), "fecha"), "15 oct 2024, 14:02");
        assert_eq!(format_cell(Some(&json!("2024-10-15")), "ultima_fecha"), "15 oct 2024, 00:00");
        assert_eq!(format_cell(Some(&json!("15/10/2024")), "fecha"), "15/10/2024");
        assert_eq!(format_cell(Some(&json!("pendiente")), "fecha"), "pendiente");
        assert_eq!(format_cell(Some(&json!("2024-10-15")), "codigo"), "2024-10-15");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(format_cell(Some(&json!([])), "productos"), "Ninguno");
        assert_eq!(format_cell(Some(&json!([{ "id": 1 }, { "id": 2 }])), "productos"), "2 producto(s)");
        assert_eq!(format_cell(Some(&json!([{ "id": 1 }])), "lineas"), "1 item(s)");
        assert_eq!(format_cell(Some(&json!(["a", "b", 3])), "tags"), "a, b, 3");
    }

    #[test]
    fn test_objects() {
        let cliente = json!({ "nombre": "Ana Pérez", "email": "ana@mail.com" });
        assert_eq!(format_cell(Some(&cliente), "cliente"), "Ana Pérez (ana@mail.com)");
        assert_eq!(format_cell(Some(&json!({ "nombre": "Ana" })), "cliente"), "Ana");
        assert_eq!(format_cell(Some(&json!({ "a": 1 })), "extra"), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(format_cell(Some(&json!(true)), "activo"), "Sí");
        assert_eq!(format_cell(Some(&json!(false)), "activo"), "No");
        assert_eq!(format_cell(Some(&json!(1234.5)), "precio_total"), "Bs. 1,234.50");
        assert_eq!(format_cell(Some(&json!(1234.5)), "monto_total_vendido"), "Bs. 1,234.50");
        assert_eq!(format_cell(Some(&json!(12.345)), "porcentaje"), "12.35");
        assert_eq!(format_cell(Some(&json!(15000)), "stock"), "15,000");
        assert_eq!(format_cell(Some(&json!(3.0)), "cantidad"), "3");
        assert_eq!(format_cell(Some(&json!("Laptop")), "nombre"), "Laptop");
    }

    #[test]
    fn test_summary_values() {
        assert_eq!(format_summary_value(&json!(1234.5), "total_gastado"), "Bs. 1234.50");
        assert_eq!(format_summary_value(&json!(0.25), "tasa"), "0.25");
        assert_eq!(format_summary_value(&json!(12000), "total_ventas"), "12,000");
        assert_eq!(format_summary_value(&json!("Bs. 10.00"), "total"), "Bs. 10.00");
        assert_eq!(format_summary_value(&Value::Null, "periodo"), "null");
        assert_eq!(format_summary_value(&json!(true), "vip"), "true");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
    }
}
