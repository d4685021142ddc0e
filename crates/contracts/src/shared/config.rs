use serde::{Deserialize, Serialize};

/// localStorage key shared by the settings screen and the storefront footer
pub const STORE_SETTINGS_KEY: &str = "configuracion_tienda";

/// Resolve an API path against the configured base URL
///
/// Rules:
/// 1. Absolute `http://` / `https://` paths are returned as is
/// 2. With a base: one trailing `/` is stripped from the base, a leading `/`
///    is ensured on the path
/// 3. Without a base: relative to the current origin
pub fn resolve_api_url(base: Option<&str>, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let clean_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    match base.filter(|b| !b.is_empty()) {
        Some(base) => {
            let base = base.strip_suffix('/').unwrap_or(base);
            format!("{}{}", base, clean_path)
        }
        None => clean_path,
    }
}

/// Store configuration kept in the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub nombre_tienda: String,
    pub descripcion: String,
    pub email_contacto: String,
    pub telefono: String,
    pub ciudad: String,
    pub pais: String,
    pub moneda: String,
    pub zona_horaria: String,
    pub notificaciones_sistema: bool,
    pub actualizacion_automatica: bool,
}

/// Stored shape: every field optional, empty strings count as missing
#[derive(Debug, Default, Deserialize)]
struct StoredSettings {
    nombre_tienda: Option<String>,
    descripcion: Option<String>,
    email_contacto: Option<String>,
    telefono: Option<String>,
    ciudad: Option<String>,
    pais: Option<String>,
    moneda: Option<String>,
    zona_horaria: Option<String>,
    notificaciones_sistema: Option<bool>,
    actualizacion_automatica: Option<bool>,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl StoreSettings {
    pub fn defaults(user_email: Option<&str>) -> Self {
        Self {
            nombre_tienda: "SmartSales365".into(),
            descripcion: "Sistema de gestión de ventas inteligente".into(),
            email_contacto: user_email.unwrap_or_default().to_string(),
            telefono: String::new(),
            ciudad: "La Paz".into(),
            pais: "Bolivia".into(),
            moneda: "BOB".into(),
            zona_horaria: "America/La_Paz".into(),
            notificaciones_sistema: true,
            actualizacion_automatica: true,
        }
    }

    /// Merge a stored JSON document over the defaults.
    ///
    /// A missing or corrupt document yields the defaults.
    pub fn from_stored(json: Option<&str>, user_email: Option<&str>) -> Self {
        let defaults = Self::defaults(user_email);
        let stored = match json.map(serde_json::from_str::<StoredSettings>) {
            Some(Ok(stored)) => stored,
            _ => return defaults,
        };

        Self {
            nombre_tienda: or_default(stored.nombre_tienda, &defaults.nombre_tienda),
            descripcion: or_default(stored.descripcion, &defaults.descripcion),
            email_contacto: or_default(stored.email_contacto, &defaults.email_contacto),
            telefono: or_default(stored.telefono, &defaults.telefono),
            ciudad: or_default(stored.ciudad, &defaults.ciudad),
            pais: or_default(stored.pais, &defaults.pais),
            moneda: or_default(stored.moneda, &defaults.moneda),
            zona_horaria: or_default(stored.zona_horaria, &defaults.zona_horaria),
            notificaciones_sistema: stored
                .notificaciones_sistema
                .unwrap_or(defaults.notificaciones_sistema),
            actualizacion_automatica: stored
                .actualizacion_automatica
                .unwrap_or(defaults.actualizacion_automatica),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_passthrough() {
        assert_eq!(
            resolve_api_url(Some("https://api.example.com"), "https://cdn.example.com/x"),
            "https://cdn.example.com/x"
        );
    }

    #[test]
    fn test_base_and_slashes() {
        assert_eq!(
            resolve_api_url(Some("https://api.example.com/"), "api/login/"),
            "https://api.example.com/api/login/"
        );
        assert_eq!(
            resolve_api_url(Some("https://api.example.com"), "/api/login/"),
            "https://api.example.com/api/login/"
        );
    }

    #[test]
    fn test_no_base_is_relative() {
        assert_eq!(resolve_api_url(None, "api/login/"), "/api/login/");
        assert_eq!(resolve_api_url(Some(""), "/api/login/"), "/api/login/");
    }

    #[test]
    fn test_settings_defaults_when_missing() {
        let s = StoreSettings::from_stored(None, Some("admin@tienda.bo"));
        assert_eq!(s.nombre_tienda, "SmartSales365");
        assert_eq!(s.email_contacto, "admin@tienda.bo");
        assert!(s.notificaciones_sistema);
    }

    #[test]
    fn test_settings_partial_merge() {
        let stored = r#"{"nombre_tienda":"Mi Tienda","ciudad":"","actualizacion_automatica":false}"#;
        let s = StoreSettings::from_stored(Some(stored), None);
        assert_eq!(s.nombre_tienda, "Mi Tienda");
        assert_eq!(s.ciudad, "La Paz");
        assert!(!s.actualizacion_automatica);
        assert!(s.notificaciones_sistema);
    }

    #[test]
    fn test_settings_corrupt_json() {
        let s = StoreSettings::from_stored(Some("{not json"), None);
        assert_eq!(s, StoreSettings::defaults(None));
    }
}
