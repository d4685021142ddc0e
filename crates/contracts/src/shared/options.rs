//! Select options returned by the various `opciones-filtros` endpoints

use super::serde_utils::{id_string, string_or_null};
use serde::{Deserialize, Serialize};

/// Entity reference rendered as `<option value=id>nombre</option>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdName {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
}

/// Enumerated value with its display label (estado, método de pago)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub value: String,
    pub label: String,
}

/// Filter options; fields absent in the response default to empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub clientes: Vec<IdName>,
    #[serde(default)]
    pub productos: Vec<IdName>,
    #[serde(default)]
    pub categorias: Vec<IdName>,
    #[serde(default)]
    pub metodos_pago: Vec<ValueLabel>,
    #[serde(default)]
    pub estados: Vec<ValueLabel>,
    #[serde(default)]
    pub is_admin: bool,
}

impl FilterOptions {
    pub fn payment_label(&self, value: &str) -> Option<&str> {
        self.metodos_pago
            .iter()
            .find(|m| m.value == value)
            .map(|m| m.label.as_str())
    }
}
