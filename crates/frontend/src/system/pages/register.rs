use contracts::system::auth::RegisterRequest;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{use_global_context, Screen};
use crate::system::auth::api;

/// Delay before the success state hands over to the login form
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_global_context();
    let form = RwSignal::new(RegisterRequest::default());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);
    let registered = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = form.get();

        if let Err(e) = data.validate() {
            error.set(Some(e));
            return;
        }
        if data.contrasena != confirm.get() {
            error.set(Some("Las contraseñas no coinciden".into()));
            return;
        }

        is_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::register(&data).await {
                Ok(_) => {
                    registered.set(true);
                    Timeout::new(REDIRECT_DELAY_MS, move || ctx.navigate(Screen::Login)).forget();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            is_loading.set(false);
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, required: bool| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    required=required
                    prop:value=move || form.with(|f| register_field(f, id))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set_register_field(f, id, value));
                    }
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"SmartSales365"</h1>
                <h2>"Crear cuenta"</h2>

                <Show
                    when=move || !registered.get()
                    fallback=|| view! {
                        <div class="success-message">
                            "¡Cuenta creada con éxito! Redirigiendo al inicio de sesión..."
                        </div>
                    }
                >
                    {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                    <form on:submit=on_submit>
                        {field("nombre", "Nombre", "text", true)}
                        {field("apellido", "Apellido", "text", false)}
                        {field("email", "Email", "email", true)}
                        {field("telefono", "Teléfono", "tel", false)}
                        {field("direccion", "Dirección", "text", false)}
                        {field("contrasena", "Contraseña", "password", true)}
                        <div class="form-group">
                            <label for="confirmar">"Confirmar contraseña"</label>
                            <input
                                type="password"
                                id="confirmar"
                                required
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </div>
                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Registrando..." } else { "Registrarme" }}
                        </button>
                    </form>
                </Show>

                <div class="login-info">
                    "¿Ya tienes cuenta? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Screen::Login);
                    }>"Inicia sesión"</a>
                </div>
            </div>
        </div>
    }
}

fn register_field(form: &RegisterRequest, id: &str) -> String {
    match id {
        "nombre" => form.nombre.clone(),
        "apellido" => form.apellido.clone(),
        "email" => form.email.clone(),
        "contrasena" => form.contrasena.clone(),
        "telefono" => form.telefono.clone().unwrap_or_default(),
        "direccion" => form.direccion.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

/// Optional fields become `None` when cleared
fn set_register_field(form: &mut RegisterRequest, id: &str, value: String) {
    match id {
        "nombre" => form.nombre = value,
        "apellido" => form.apellido = value,
        "email" => form.email = value,
        "contrasena" => form.contrasena = value,
        "telefono" => form.telefono = non_empty(value),
        "direccion" => form.direccion = non_empty(value),
        _ => {}
    }
}
