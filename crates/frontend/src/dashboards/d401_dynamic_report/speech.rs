//! Browser speech recognition (`SpeechRecognition` / `webkitSpeechRecognition`).
//!
//! The API is not part of the stable web-sys surface, so the object is
//! driven through `js_sys::Reflect`. One recognition yields at most one
//! final result in `es-ES`.

use contracts::shared::api::ApiError;
use js_sys::{Array, Function, Reflect};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const NOT_AVAILABLE_MESSAGE: &str =
    "El reconocimiento de voz no está disponible en tu navegador. Usa Chrome o Edge.";
const START_FAILED_MESSAGE: &str =
    "Error al iniciar grabación. Asegúrate de permitir el acceso al micrófono.";

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    Transcript(String),
    Ended,
    /// `error` code of the recognition error event
    Failed(String),
}

/// User-facing message for a recognition error code
pub fn error_message(code: &str) -> &'static str {
    match code {
        "no-speech" => "No se detectó voz. Intenta nuevamente.",
        "not-allowed" => "Permiso de micrófono denegado. Por favor, permite el acceso al micrófono.",
        _ => "Error al reconocer voz. Intenta nuevamente.",
    }
}

pub fn not_available() -> ApiError {
    ApiError::NotAvailable(NOT_AVAILABLE_MESSAGE.to_string())
}

/// New dictation is appended to what is already typed
pub fn append_transcript(current: &str, transcript: &str) -> String {
    if current.is_empty() {
        transcript.to_string()
    } else {
        format!("{} {}", current, transcript)
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn set(target: &JsValue, key: &str, value: &JsValue) {
    if let Err(e) = Reflect::set(target, &JsValue::from_str(key), value) {
        log::warn!("speech recognition: setting {} failed: {:?}", key, e);
    }
}

fn constructor() -> Option<Function> {
    let window: JsValue = web_sys::window()?.into();
    ["SpeechRecognition", "webkitSpeechRecognition"]
        .iter()
        .find_map(|name| get(&window, name).filter(JsValue::is_function))
        .map(|v| v.unchecked_into::<Function>())
}

/// `event.results[0][0].transcript`
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = get(event, "results")?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&first, 0).ok()?;
    get(&alternative, "transcript")?.as_string()
}

pub struct SpeechRecognizer {
    recognition: JsValue,
    _handlers: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl SpeechRecognizer {
    /// `None` when the browser has no speech recognition
    pub fn new(on_event: impl Fn(SpeechEvent) + 'static) -> Option<Self> {
        let ctor = constructor()?;
        let recognition = Reflect::construct(&ctor, &Array::new()).ok()?;
        set(&recognition, "continuous", &JsValue::FALSE);
        set(&recognition, "interimResults", &JsValue::FALSE);
        set(&recognition, "lang", &JsValue::from_str("es-ES"));

        let on_event = Rc::new(on_event);
        let mut handlers = Vec::with_capacity(3);

        let emit = on_event.clone();
        handlers.push((
            "onresult",
            Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |event: JsValue| {
                if let Some(text) = first_transcript(&event) {
                    emit(SpeechEvent::Transcript(text));
                }
            })),
        ));
        let emit = on_event.clone();
        handlers.push((
            "onend",
            Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |_event: JsValue| {
                emit(SpeechEvent::Ended);
            })),
        ));
        let emit = on_event;
        handlers.push((
            "onerror",
            Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |event: JsValue| {
                let code = get(&event, "error").and_then(|v| v.as_string()).unwrap_or_default();
                emit(SpeechEvent::Failed(code));
            })),
        ));

        for (name, handler) in &handlers {
            set(&recognition, name, handler.as_ref());
        }

        Some(Self {
            recognition,
            _handlers: handlers.into_iter().map(|(_, h)| h).collect(),
        })
    }

    fn call(&self, method: &str) -> Result<(), JsValue> {
        let function: Function = get(&self.recognition, method)
            .ok_or_else(|| JsValue::from_str(method))?
            .dyn_into()?;
        function.call0(&self.recognition).map(|_| ())
    }

    pub fn start(&self) -> Result<(), ApiError> {
        self.call("start").map_err(|e| {
            log::error!("speech recognition start failed: {:?}", e);
            ApiError::Browser(START_FAILED_MESSAGE.to_string())
        })
    }

    pub fn stop(&self) {
        if let Err(e) = self.call("stop") {
            log::warn!("speech recognition stop failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(error_message("no-speech"), "No se detectó voz. Intenta nuevamente.");
        assert!(error_message("not-allowed").starts_with("Permiso de micrófono"));
        assert_eq!(error_message("network"), "Error al reconocer voz. Intenta nuevamente.");
    }

    #[test]
    fn test_not_available_message() {
        assert_eq!(not_available().to_string(), NOT_AVAILABLE_MESSAGE);
    }

    #[test]
    fn test_append_transcript() {
        assert_eq!(append_transcript("", "ventas"), "ventas");
        assert_eq!(append_transcript("Reporte de", "ventas"), "Reporte de ventas");
    }
}
