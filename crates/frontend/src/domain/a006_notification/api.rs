use contracts::domain::a006_notification::{
    notification_path, CreateNotificationDto, MarkReadRequest, NotificationFilter,
    NotificationListResponse, NOTIFICATIONS_LIST_PATH, NOTIFICATIONS_MARK_ALL_PATH,
    NOTIFICATIONS_PATH,
};
use contracts::shared::api::{decode, ApiError, SuccessCheck};
use serde_json::Value;

use crate::shared::api_utils::{self, delete, get, patch, post};

pub async fn list_notifications(filter: &NotificationFilter) -> Result<NotificationListResponse, ApiError> {
    let url = filter.to_query().to_url(NOTIFICATIONS_LIST_PATH);
    let body = api_utils::send(
        get(&url),
        SuccessCheck::StatusOnly,
        "Error al obtener notificaciones",
    )
    .await?;
    decode(body)
}

pub async fn create_notification(dto: &CreateNotificationDto) -> Result<Value, ApiError> {
    api_utils::send_json(
        post(NOTIFICATIONS_PATH),
        dto,
        SuccessCheck::StatusOnly,
        "Error al crear notificación",
    )
    .await
}

pub async fn mark_notification_read(id: i64, leida: bool) -> Result<Value, ApiError> {
    api_utils::send_json(
        patch(&notification_path(id)),
        &MarkReadRequest { leida },
        SuccessCheck::StatusOnly,
        "Error al actualizar notificación",
    )
    .await
}

pub async fn delete_notification(id: i64) -> Result<Value, ApiError> {
    api_utils::send(
        delete(&notification_path(id)),
        SuccessCheck::StatusOnly,
        "Error al eliminar notificación",
    )
    .await
}

pub async fn mark_all_read() -> Result<Value, ApiError> {
    api_utils::send(
        post(NOTIFICATIONS_MARK_ALL_PATH),
        SuccessCheck::StatusOnly,
        "Error al marcar notificaciones",
    )
    .await
}
