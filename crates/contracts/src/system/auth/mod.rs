use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const LOGIN_PATH: &str = "/api/login/";
pub const LOGOUT_PATH: &str = "/api/logout/";
pub const CHECK_SESSION_PATH: &str = "/api/check-session/";
pub const REGISTER_PATH: &str = "/api/register/";

pub const ROLE_ADMIN: &str = "administrador";
pub const ROLE_CLIENT: &str = "cliente";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub contrasena: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() || self.email.trim().is_empty() {
            return Err("Nombre y email son obligatorios".into());
        }
        if !self.email.contains('@') {
            return Err("Email inválido".into());
        }
        if self.contrasena.chars().count() < 6 {
            return Err("La contraseña debe tener al menos 6 caracteres".into());
        }
        Ok(())
    }
}

/// Usuario de la sesión.
///
/// The role arrives under different keys depending on the endpoint:
/// `rol`, `role`, or a nested `id_rol.nombre`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rol: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub id_rol: Option<Value>,
}

impl SessionUser {
    fn explicit_role(&self) -> Option<&str> {
        let nested = self
            .id_rol
            .as_ref()
            .and_then(|r| r.get("nombre"))
            .and_then(Value::as_str);
        [self.rol.as_deref(), self.role.as_deref(), nested]
            .into_iter()
            .flatten()
            .find(|r| !r.is_empty())
    }

    /// Whether the payload carried any role at all
    pub fn has_role(&self) -> bool {
        self.explicit_role().is_some()
    }

    /// Lower-cased role, `cliente` when none is present
    pub fn role_name(&self) -> String {
        self.explicit_role()
            .map(str::to_lowercase)
            .unwrap_or_else(|| ROLE_CLIENT.to_string())
    }

    pub fn is_admin(&self) -> bool {
        self.role_name() == ROLE_ADMIN
    }

    pub fn display_name(&self) -> String {
        self.nombre
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Usuario".to_string())
    }
}

/// `GET /api/check-session/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl SessionResponse {
    pub fn into_user(self) -> Option<SessionUser> {
        if self.authenticated {
            self.user
        } else {
            None
        }
    }
}

/// Body of login / register responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(v: Value) -> SessionUser {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_role_precedence() {
        let u = user(json!({ "rol": "Administrador", "role": "cliente" }));
        assert_eq!(u.role_name(), "administrador");
        assert!(u.is_admin());

        let u = user(json!({ "role": "CLIENTE" }));
        assert_eq!(u.role_name(), "cliente");
    }

    #[test]
    fn test_nested_role() {
        let u = user(json!({ "id_rol": { "id": 1, "nombre": "Administrador" } }));
        assert!(u.is_admin());

        // integer foreign key without a name
        let u = user(json!({ "id_rol": 2 }));
        assert!(!u.has_role());
        assert_eq!(u.role_name(), "cliente");
    }

    #[test]
    fn test_session_unauthenticated() {
        let s: SessionResponse = serde_json::from_value(json!({ "authenticated": false, "user": { "nombre": "x" } })).unwrap();
        assert!(s.into_user().is_none());
    }

    #[test]
    fn test_register_validation() {
        let mut r = RegisterRequest {
            nombre: "Ana".into(),
            email: "ana@correo.bo".into(),
            contrasena: "123".into(),
            ..Default::default()
        };
        assert!(r.validate().is_err());
        r.contrasena = "secreto1".into();
        assert!(r.validate().is_ok());
    }
}
