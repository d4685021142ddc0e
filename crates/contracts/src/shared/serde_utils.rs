//! Lenient deserializers for backend values.
//!
//! Decimal columns are serialized by the backend either as JSON numbers or
//! as strings (`"12.50"`). Both are accepted; anything else becomes `0`.
//! Nullable text columns arrive as `null` and read as an empty string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Numeric value of a JSON number or numeric string
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value).unwrap_or(0.0))
}

pub fn opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value))
}

pub fn vec_f64_lenient<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .iter()
        .map(|v| value_as_f64(v).unwrap_or(0.0))
        .collect())
}

/// Integer ids that may arrive as numbers or strings
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Text that may be `null`
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "f64_lenient")]
        precio: f64,
        #[serde(default, deserialize_with = "opt_f64_lenient")]
        oferta: Option<f64>,
        #[serde(default, deserialize_with = "vec_f64_lenient")]
        serie: Vec<f64>,
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(default, deserialize_with = "string_or_null")]
        nota: String,
    }

    #[test]
    fn test_numbers_and_strings() {
        let row: Row = serde_json::from_str(
            r#"{"precio":"12.50","oferta":null,"serie":[1,"2.5",null],"id":7}"#,
        )
        .unwrap();
        assert_eq!(row.precio, 12.5);
        assert_eq!(row.oferta, None);
        assert_eq!(row.serie, vec![1.0, 2.5, 0.0]);
        assert_eq!(row.id, "7");
    }

    #[test]
    fn test_missing_optional_fields() {
        let row: Row = serde_json::from_str(r#"{"precio":3,"id":"abc"}"#).unwrap();
        assert_eq!(row.oferta, None);
        assert!(row.serie.is_empty());
        assert_eq!(row.id, "abc");
        assert_eq!(row.nota, "");
    }

    #[test]
    fn test_null_text() {
        let row: Row = serde_json::from_str(r#"{"precio":1,"id":2,"nota":null}"#).unwrap();
        assert_eq!(row.nota, "");
        let row: Row = serde_json::from_str(r#"{"precio":1,"id":2,"nota":"urgente"}"#).unwrap();
        assert_eq!(row.nota, "urgente");
    }
}
