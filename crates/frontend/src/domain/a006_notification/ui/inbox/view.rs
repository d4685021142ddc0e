use chrono::Utc;
use contracts::domain::a006_notification::{
    CreateNotificationDto, Notification, NotificationKind, ALL_KINDS, AUDIENCES, PRIORITIES,
};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use super::view_model::{NotificationsViewModel, REFRESH_INTERVAL_MS};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;

const CLIENT_KINDS: [NotificationKind; 6] = [
    NotificationKind::Cupon,
    NotificationKind::Oferta,
    NotificationKind::Venta,
    NotificationKind::Pedido,
    NotificationKind::Info,
    NotificationKind::Alerta,
];

/// Labels of the kinds offered in the admin send form
fn send_kind_label(kind: &NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Venta => "Nueva Venta",
        NotificationKind::Stock => "Stock Bajo",
        NotificationKind::Producto => "Nuevo Producto",
        NotificationKind::Pedido => "Pedido Confirmado",
        NotificationKind::Cupon => "Cupón de Descuento",
        NotificationKind::Oferta => "Oferta Especial",
        NotificationKind::Alerta => "Alerta",
        NotificationKind::Info | NotificationKind::Other => "Información",
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let is_admin = auth_state.get_untracked().is_admin();
    let vm = NotificationsViewModel::new();

    // Reload now and every 30 s; the timer restarts when the kind filter changes
    Effect::new(move |previous: Option<Interval>| {
        drop(previous);
        let kind = vm.kind_filter.get();
        vm.load_command(kind.clone());
        Interval::new(REFRESH_INTERVAL_MS, move || vm.load_command(kind.clone()))
    });

    let kinds: Vec<NotificationKind> = if is_admin {
        NotificationKind::ALL.to_vec()
    } else {
        CLIENT_KINDS.to_vec()
    };

    view! {
        <PageFrame page_id="a006_notification--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div>
                    <h2>
                        {icon("bell")}
                        {if is_admin { " Sistema de Notificaciones" } else { " Mis Notificaciones" }}
                    </h2>
                    <p class="page__subtitle">
                        {if is_admin {
                            "Gestiona y envía notificaciones push a usuarios del sistema"
                        } else {
                            "Revisa tus notificaciones y cupones de descuento"
                        }}
                    </p>
                </div>
                <div class="page__actions">
                    {move || {
                        let unread = vm.unread();
                        (unread > 0).then(|| view! {
                            <button class="btn-secondary" on:click=move |_| vm.mark_all_read_command()>
                                {icon("check")}
                                {format!(" Marcar todas como leídas ({})", unread)}
                            </button>
                        })
                    }}
                    {is_admin.then(|| view! {
                        <button class="btn-primary" on:click=move |_| vm.toggle_form()>
                            {icon("plus")}
                            {move || if vm.form.with(Option::is_some) { " Cancelar" } else { " Nueva Notificación" }}
                        </button>
                    })}
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="error-message" on:click=move |_| vm.error.set(None)>{e}</div>
            })}
            {move || vm.notice.get().map(|n| view! {
                <div class="success-message" on:click=move |_| vm.notice.set(None)>{n}</div>
            })}

            {is_admin.then(|| view! { <SendForm vm=vm /> })}

            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Buscar notificaciones..."
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || vm.kind_filter.get()
                    on:change=move |ev| vm.kind_filter.set(event_target_value(&ev))
                >
                    <option value=ALL_KINDS>"Todas"</option>
                    {kinds
                        .into_iter()
                        .map(|kind| view! { <option value=kind.code()>{kind.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="page__content notification-list">
                {move || {
                    if vm.loading.get() && vm.notifications.with(Vec::is_empty) {
                        return view! { <div class="loading">"Cargando notificaciones..."</div> }.into_any();
                    }
                    let list = vm.visible();
                    if list.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <h3>"No hay notificaciones"</h3>
                                <p>"No se encontraron notificaciones con los filtros seleccionados"</p>
                            </div>
                        }
                        .into_any();
                    }
                    list.into_iter()
                        .map(|n| view! { <NotificationItem notification=n vm=vm is_admin=is_admin /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn NotificationItem(notification: Notification, vm: NotificationsViewModel, is_admin: bool) -> impl IntoView {
    let id = notification.id;
    let kind = notification.kind();
    let color = kind.color();
    let item_class = format!(
        "notification-item {} priority-{}",
        if notification.leida { "notification-item--read" } else { "notification-item--unread" },
        notification.prioridad
    );

    view! {
        <div class=item_class>
            <div class="notification-item__icon" style=format!("background-color: {}20; color: {}", color, color)>
                {kind.icon()}
            </div>
            <div class="notification-item__body">
                <div class="notification-item__header">
                    <h4>{notification.titulo.clone()}</h4>
                    <div class="notification-item__badges">
                        <span class=format!("badge-priority {}", notification.prioridad)>{notification.prioridad.clone()}</span>
                        {is_admin.then(|| view! { <span class="badge-audience">{notification.audience_label()}</span> })}
                    </div>
                </div>
                <p>{notification.mensaje.clone()}</p>
                <div class="notification-item__footer">
                    <span class="notification-item__date">{notification.age_label(Utc::now())}</span>
                    <div class="notification-item__actions">
                        {(!notification.leida).then(|| view! {
                            <button class="icon-btn" title="Marcar como leída" on:click=move |_| vm.mark_read_command(id)>
                                {icon("check")}
                            </button>
                        })}
                        <button class="icon-btn" title="Eliminar" on:click=move |_| vm.delete_command(id)>
                            {icon("trash")}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SendForm(vm: NotificationsViewModel) -> impl IntoView {
    let field = move |read: fn(&CreateNotificationDto) -> String| {
        move || vm.form.with(|f| f.as_ref().map(read).unwrap_or_default())
    };
    let choices = |options: &[(&'static str, &'static str)]| {
        options
            .iter()
            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
            .collect_view()
    };

    view! {
        <Show when=move || vm.form.with(Option::is_some)>
            <div class="form-card">
                <h3>"Crear Nueva Notificación"</h3>
                <div class="form-grid">
                    <div class="form-group">
                        <label>"Tipo de Notificación"</label>
                        <select
                            prop:value=field(|f| f.tipo.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.update_form(|f| f.tipo = value);
                            }
                        >
                            {NotificationKind::ALL
                                .iter()
                                .map(|kind| view! { <option value=kind.code()>{send_kind_label(kind)}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Destinatario"</label>
                        <select
                            prop:value=field(|f| f.destinatario.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.update_form(|f| f.destinatario = value);
                            }
                        >
                            {choices(&AUDIENCES)}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Prioridad"</label>
                        <select
                            prop:value=field(|f| f.prioridad.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.update_form(|f| f.prioridad = value);
                            }
                        >
                            {choices(&PRIORITIES)}
                        </select>
                    </div>
                </div>
                <div class="form-group">
                    <label>"Título"</label>
                    <input
                        type="text"
                        placeholder="Ej: Nueva Venta Realizada"
                        prop:value=field(|f| f.titulo.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_form(|f| f.titulo = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Mensaje"</label>
                    <textarea
                        rows="4"
                        placeholder="Escribe el mensaje de la notificación..."
                        prop:value=field(|f| f.mensaje.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_form(|f| f.mensaje = value);
                        }
                    ></textarea>
                </div>
                <div class="form-actions">
                    <button class="btn-primary" on:click=move |_| vm.send_command()>
                        {icon("check")} " Enviar Notificación"
                    </button>
                    <button class="btn-secondary" on:click=move |_| vm.form.set(None)>"Cancelar"</button>
                </div>
            </div>
        </Show>
    }
}
