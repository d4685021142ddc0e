use contracts::shared::api::{decode, ApiError, SuccessCheck};
use contracts::system::auth::{
    AuthResponse, LoginRequest, RegisterRequest, SessionResponse, SessionUser, CHECK_SESSION_PATH,
    LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH,
};

use crate::shared::api_utils::{self, get, post};

/// Login with email and password; the session cookie is set by the server
pub async fn login(email: String, contrasena: String) -> Result<AuthResponse, ApiError> {
    let request = LoginRequest { email, contrasena };
    let body = api_utils::send_json(
        post(LOGIN_PATH),
        &request,
        SuccessCheck::StatusOnly,
        "Error al iniciar sesión",
    )
    .await?;
    decode(body)
}

pub async fn logout() -> Result<(), ApiError> {
    api_utils::send(post(LOGOUT_PATH), SuccessCheck::StatusOnly, "Error al cerrar sesión").await?;
    Ok(())
}

/// Current session user, `None` when anonymous.
///
/// Never fails: transport or server errors count as "not logged in".
pub async fn check_session() -> Option<SessionUser> {
    let result = api_utils::send(get(CHECK_SESSION_PATH), SuccessCheck::StatusOnly, "")
        .await
        .and_then(decode::<SessionResponse>);
    match result {
        Ok(session) => session.into_user(),
        Err(e) => {
            log::warn!("check-session failed: {}", e);
            None
        }
    }
}

pub async fn register(data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    let body = api_utils::send_json(
        post(REGISTER_PATH),
        data,
        SuccessCheck::StatusOnly,
        "Error al registrar cuenta",
    )
    .await?;
    decode(body)
}
