use contracts::system::auth::SessionUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// True until the first session check has finished
    pub checking: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(SessionUser::is_admin).unwrap_or(false)
    }

    pub fn user_email(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.email.clone())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        user: None,
        checking: true,
    });

    // Restore the cookie session on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let user = api::check_session().await;
            set_auth_state.set(AuthState {
                user,
                checking: false,
            });
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Login and store the resulting user.
///
/// When the login response omits the user, the session endpoint is asked.
pub async fn do_login(
    email: String,
    contrasena: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, contrasena)
        .await
        .map_err(|e| e.to_string())?;

    let user = match response.user {
        Some(user) if user.has_role() => Some(user),
        _ => api::check_session().await.or(response.user),
    };

    set_auth_state.set(AuthState {
        user,
        checking: false,
    });
    Ok(())
}

/// Logout; local state is cleared even when the server call fails
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::error!("logout failed: {}", e);
    }
    set_auth_state.set(AuthState::default());
}
