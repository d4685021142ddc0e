use contracts::shared::config::StoreSettings;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::storage::{load_store_settings, save_store_settings};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_auth;

/// How long the save confirmation stays visible
const MESSAGE_TIMEOUT_MS: u32 = 3_000;

const CURRENCIES: [(&str, &str); 3] = [
    ("BOB", "Boliviano (Bs.)"),
    ("USD", "Dólar estadounidense ($)"),
    ("EUR", "Euro (€)"),
];

const TIME_ZONES: [&str; 4] = [
    "America/La_Paz",
    "America/Lima",
    "America/Santiago",
    "America/Argentina/Buenos_Aires",
];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let email = auth_state.get_untracked().user_email();
    let settings = RwSignal::new(load_store_settings(email.as_deref()));
    let message = RwSignal::new(Option::<(bool, String)>::None);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = save_store_settings(&settings.get());
        match result {
            Ok(()) => {
                log::info!("store settings saved");
                message.set(Some((true, "Configuración guardada correctamente".into())));
            }
            Err(e) => message.set(Some((false, e))),
        }
        Timeout::new(MESSAGE_TIMEOUT_MS, move || message.set(None)).forget();
    };

    let on_reset = move |_| {
        let email = auth_state.get_untracked().user_email();
        settings.set(StoreSettings::defaults(email.as_deref()));
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           get: fn(&StoreSettings) -> String,
                           set: fn(&mut StoreSettings, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=kind
                    prop:value=move || settings.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        settings.update(|s| set(s, value));
                    }
                />
            </div>
        }
    };

    let toggle = move |label: &'static str,
                       get: fn(&StoreSettings) -> bool,
                       set: fn(&mut StoreSettings, bool)| {
        view! {
            <label class="settings-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || settings.with(get)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        settings.update(|s| set(s, checked));
                    }
                />
                {label}
            </label>
        }
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2>"Configuración de la tienda"</h2>
            </div>

            {move || message.get().map(|(ok, text)| {
                let class = if ok { "success-message" } else { "error-message" };
                view! { <div class=class>{text}</div> }
            })}

            <form class="page__content settings-form" on:submit=on_save>
                <section class="settings-section">
                    <h3>"Información general"</h3>
                    {text_field("Nombre de la tienda", "text", |s| s.nombre_tienda.clone(), |s, v| s.nombre_tienda = v)}
                    {text_field("Descripción", "text", |s| s.descripcion.clone(), |s, v| s.descripcion = v)}
                </section>

                <section class="settings-section">
                    <h3>"Contacto"</h3>
                    {text_field("Email de contacto", "email", |s| s.email_contacto.clone(), |s, v| s.email_contacto = v)}
                    {text_field("Teléfono", "tel", |s| s.telefono.clone(), |s, v| s.telefono = v)}
                    {text_field("Ciudad", "text", |s| s.ciudad.clone(), |s, v| s.ciudad = v)}
                    {text_field("País", "text", |s| s.pais.clone(), |s, v| s.pais = v)}
                </section>

                <section class="settings-section">
                    <h3>"Regional"</h3>
                    <div class="form-group">
                        <label>"Moneda"</label>
                        <select
                            prop:value=move || settings.with(|s| s.moneda.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                settings.update(|s| s.moneda = value);
                            }
                        >
                            {CURRENCIES
                                .iter()
                                .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Zona horaria"</label>
                        <select
                            prop:value=move || settings.with(|s| s.zona_horaria.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                settings.update(|s| s.zona_horaria = value);
                            }
                        >
                            {TIME_ZONES
                                .iter()
                                .map(|tz| view! { <option value=*tz>{*tz}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </section>

                <section class="settings-section">
                    <h3>"Sistema"</h3>
                    {toggle("Notificaciones del sistema", |s| s.notificaciones_sistema, |s, v| s.notificaciones_sistema = v)}
                    {toggle("Actualización automática", |s| s.actualizacion_automatica, |s, v| s.actualizacion_automatica = v)}
                </section>

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=on_reset>"Restablecer"</button>
                    <button type="submit" class="btn-primary">"Guardar cambios"</button>
                </div>
            </form>
        </PageFrame>
    }
}
