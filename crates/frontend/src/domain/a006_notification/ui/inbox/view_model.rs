use contracts::domain::a006_notification::{
    mark_read_locally, unread_count, visible, CreateNotificationDto, Notification,
    NotificationFilter, ALL_KINDS,
};
use contracts::shared::api::body_message;
use leptos::prelude::*;

use crate::domain::a006_notification::api;

pub const REFRESH_INTERVAL_MS: u32 = 30_000;

#[derive(Clone, Copy)]
pub struct NotificationsViewModel {
    pub notifications: RwSignal<Vec<Notification>>,
    pub kind_filter: RwSignal<String>,
    pub search: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub form: RwSignal<Option<CreateNotificationDto>>,
}

impl NotificationsViewModel {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
            kind_filter: RwSignal::new(ALL_KINDS.to_string()),
            search: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            form: RwSignal::new(None),
        }
    }

    pub fn visible(&self) -> Vec<Notification> {
        let kind = self.kind_filter.get();
        let search = self.search.get();
        self.notifications
            .with(|list| visible(list, &kind, &search).into_iter().cloned().collect())
    }

    pub fn unread(&self) -> usize {
        self.notifications.with(|list| unread_count(list))
    }

    /// A failed load empties the list; `success: false` keeps the previous one
    pub fn load_command(&self, kind_filter: String) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_notifications(&NotificationFilter::for_kind(&kind_filter)).await {
                Ok(response) if response.success => this.notifications.set(response.notificaciones),
                Ok(_) => log::warn!("notification list answered without success"),
                Err(e) => {
                    log::error!("notifications load failed: {}", e);
                    this.notifications.set(Vec::new());
                }
            }
            this.loading.set(false);
        });
    }

    pub fn reload_command(&self) {
        self.load_command(self.kind_filter.get_untracked());
    }

    pub fn mark_read_command(&self, id: i64) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::mark_notification_read(id, true).await {
                Ok(_) => this.notifications.update(|list| mark_read_locally(list, id)),
                Err(e) => {
                    log::error!("mark read failed: {}", e);
                    this.error.set(Some("Error al marcar notificación como leída".into()));
                }
            }
        });
    }

    pub fn mark_all_read_command(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::mark_all_read().await {
                Ok(_) => this
                    .notifications
                    .update(|list| list.iter_mut().for_each(|n| n.leida = true)),
                Err(e) => {
                    log::error!("mark all read failed: {}", e);
                    this.error.set(Some("Error al marcar todas las notificaciones".into()));
                }
            }
        });
    }

    pub fn delete_command(&self, id: i64) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_notification(id).await {
                Ok(_) => this.notifications.update(|list| list.retain(|n| n.id != id)),
                Err(e) => {
                    log::error!("delete notification failed: {}", e);
                    this.error.set(Some("Error al eliminar notificación".into()));
                }
            }
        });
    }

    pub fn toggle_form(&self) {
        self.form.update(|form| {
            *form = match form.take() {
                Some(_) => None,
                None => Some(CreateNotificationDto::default()),
            }
        });
    }

    pub fn update_form(&self, f: impl FnOnce(&mut CreateNotificationDto)) {
        self.form.update(|form| {
            if let Some(form) = form.as_mut() {
                f(form);
            }
        });
    }

    pub fn send_command(&self) {
        let this = *self;
        let Some(dto) = this.form.get_untracked() else {
            return;
        };
        if let Err(message) = dto.validate() {
            this.error.set(Some(message));
            return;
        }
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_notification(&dto).await {
                Ok(body) => {
                    let message = body_message(&body).unwrap_or("Notificación enviada exitosamente");
                    this.notice.set(Some(message.to_string()));
                    this.form.set(None);
                    this.reload_command();
                }
                Err(e) => {
                    log::error!("send notification failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
        });
    }
}
