//! Response envelope and error type shared by every API client.
//!
//! The backend answers with JSON bodies of the form
//! `{"success": bool, "message": "...", ...payload}`. A call is considered
//! successful when the HTTP status is 2xx and, for most endpoints, the
//! `success` flag is set. The user-facing message is taken from the body
//! when present and falls back to a per-operation text otherwise.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Ошибка вызова API. `Display` выдаёт только текст для пользователя.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Serialize(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Browser(String),

    #[error("{0}")]
    NotAvailable(String),
}

impl ApiError {
    /// HTTP status for errors produced by a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Whether a 2xx response must also carry `success: true`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessCheck {
    Required,
    StatusOnly,
}

/// Body used when the response could not be parsed as JSON
pub fn unparsed_body(check: SuccessCheck) -> Value {
    match check {
        SuccessCheck::Required => serde_json::json!({ "success": false }),
        SuccessCheck::StatusOnly => serde_json::json!({}),
    }
}

/// Parse a raw response body, substituting the fallback body on failure
pub fn parse_body(text: &str, check: SuccessCheck) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| unparsed_body(check))
}

/// `message` field of a response body, if it is a non-empty string
pub fn body_message(body: &Value) -> Option<&str> {
    non_empty(body.get("message").and_then(Value::as_str))
}

/// Validate status and envelope of a response
pub fn check_response(
    status: u16,
    body: &Value,
    check: SuccessCheck,
    fallback: &str,
) -> Result<(), ApiError> {
    let message = || body_message(body).unwrap_or(fallback).to_string();

    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            message: message(),
        });
    }

    if check == SuccessCheck::Required {
        let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        if !success {
            return Err(ApiError::Rejected(message()));
        }
    }

    Ok(())
}

/// Deserialize a whole body into a typed payload
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Parse(format!("Respuesta inválida: {}", e)))
}

/// Deserialize a single field of the body (e.g. `data`, `reporte`)
pub fn decode_field<T: DeserializeOwned>(mut body: Value, field: &str) -> Result<T, ApiError> {
    let value = body
        .get_mut(field)
        .map(Value::take)
        .unwrap_or(Value::Null);
    decode(value)
}

/// Error for endpoints that report non-2xx as `Error <status>: <text>`
pub fn status_text_error(status: u16, text: &str, fallback: &str) -> ApiError {
    let detail = if text.trim().is_empty() { fallback } else { text };
    ApiError::Http {
        status,
        message: format!("Error {}: {}", status, detail),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_success_flag() {
        let ok = json!({ "success": true, "data": {} });
        assert!(check_response(200, &ok, SuccessCheck::Required, "x").is_ok());

        let rejected = json!({ "success": false, "message": "Stock insuficiente" });
        assert_eq!(
            check_response(200, &rejected, SuccessCheck::Required, "x"),
            Err(ApiError::Rejected("Stock insuficiente".into()))
        );
    }

    #[test]
    fn test_status_only_ignores_flag() {
        let body = json!({ "notificaciones": [] });
        assert!(check_response(201, &body, SuccessCheck::StatusOnly, "x").is_ok());
    }

    #[test]
    fn test_http_error_uses_fallback() {
        let body = unparsed_body(SuccessCheck::Required);
        let err = check_response(500, &body, SuccessCheck::Required, "No se pudo obtener el carrito")
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "No se pudo obtener el carrito");
    }

    #[test]
    fn test_empty_message_falls_back() {
        let body = json!({ "success": false, "message": "" });
        let err = check_response(200, &body, SuccessCheck::Required, "Fallback").unwrap_err();
        assert_eq!(err.to_string(), "Fallback");
    }

    #[test]
    fn test_parse_body_fallback() {
        assert_eq!(parse_body("<html>", SuccessCheck::Required), json!({ "success": false }));
        assert_eq!(parse_body("", SuccessCheck::StatusOnly), json!({}));
        assert_eq!(parse_body("{\"a\":1}", SuccessCheck::Required), json!({ "a": 1 }));
    }

    #[test]
    fn test_decode_field() {
        let body = json!({ "success": true, "sugerencias": ["a", "b"] });
        let items: Vec<String> = decode_field(body, "sugerencias").unwrap();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_status_text_error() {
        let err = status_text_error(502, "", "Error al obtener estadísticas");
        assert_eq!(err.to_string(), "Error 502: Error al obtener estadísticas");
        let err = status_text_error(404, "Not Found", "x");
        assert_eq!(err.to_string(), "Error 404: Not Found");
    }
}
