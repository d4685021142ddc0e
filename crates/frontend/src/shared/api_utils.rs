//! API utilities for frontend-backend communication
//!
//! Every request carries the session cookie (`credentials: include`) and a
//! JSON content type. Responses are read as `serde_json::Value` first, so a
//! body that fails to parse still produces a meaningful error.

use contracts::shared::api::{check_response, parse_body, status_text_error, ApiError, SuccessCheck};
use contracts::shared::config::resolve_api_url;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use web_sys::RequestCredentials;

/// Base URL baked in at build time; unset means same origin
pub fn api_base() -> Option<&'static str> {
    option_env!("APP_API_URL")
}

/// Full URL for an API path
pub fn api_url(path: &str) -> String {
    resolve_api_url(api_base(), path)
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn get(path: &str) -> RequestBuilder {
    with_session(Request::get(&api_url(path)))
}

pub fn post(path: &str) -> RequestBuilder {
    with_session(Request::post(&api_url(path)))
}

pub fn put(path: &str) -> RequestBuilder {
    with_session(Request::put(&api_url(path)))
}

pub fn patch(path: &str) -> RequestBuilder {
    with_session(Request::patch(&api_url(path)))
}

pub fn delete(path: &str) -> RequestBuilder {
    with_session(Request::delete(&api_url(path)))
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("Error de conexión: {}", e))
}

/// Status and parsed body; an unreadable body becomes the fallback document
async fn read_body(response: Response, check: SuccessCheck) -> (u16, Value) {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    (status, parse_body(&text, check))
}

/// Send a request without body and validate the response envelope
pub async fn send(
    builder: RequestBuilder,
    check: SuccessCheck,
    fallback: &str,
) -> Result<Value, ApiError> {
    let response = builder.send().await.map_err(network_error)?;
    let (status, body) = read_body(response, check).await;
    check_response(status, &body, check, fallback)?;
    Ok(body)
}

/// Send a JSON body and validate the response envelope
pub async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
    check: SuccessCheck,
    fallback: &str,
) -> Result<Value, ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Serialize(format!("No se pudo preparar la solicitud: {}", e)))?;
    let response = request.send().await.map_err(network_error)?;
    let (status, body) = read_body(response, check).await;
    check_response(status, &body, check, fallback)?;
    Ok(body)
}

/// Like [`send_json`] but leaves status handling to the caller
pub async fn send_json_raw<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<(u16, Value), ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Serialize(format!("No se pudo preparar la solicitud: {}", e)))?;
    let response = request.send().await.map_err(network_error)?;
    Ok(read_body(response, SuccessCheck::StatusOnly).await)
}

/// GET whose non-2xx errors read `Error <status>: <body text>`
pub async fn get_with_status_text(path: &str, fallback: &str) -> Result<Value, ApiError> {
    let response = get(path).send().await.map_err(network_error)?;
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if !response.ok() {
        return Err(status_text_error(status, &text, fallback));
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(format!("Respuesta inválida: {}", e)))
}

/// Binary download; `on_error` builds the error from status and parsed body
pub async fn fetch_blob(
    path: &str,
    on_error: impl FnOnce(u16, &Value) -> ApiError,
) -> Result<Vec<u8>, ApiError> {
    let response = get(path).send().await.map_err(network_error)?;
    if !response.ok() {
        let (status, body) = read_body(response, SuccessCheck::StatusOnly).await;
        return Err(on_error(status, &body));
    }
    response
        .binary()
        .await
        .map_err(|e| ApiError::Browser(format!("No se pudo leer el archivo: {}", e)))
}
