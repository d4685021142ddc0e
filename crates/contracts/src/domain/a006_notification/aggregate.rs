use super::kind::NotificationKind;
use crate::shared::date_utils::{format_date_numeric, parse_utc};
use crate::shared::query::QueryBuilder;
use crate::shared::serde_utils::string_or_null;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing path (no trailing slash before the query string)
pub const NOTIFICATIONS_LIST_PATH: &str = "/api/notificaciones";
pub const NOTIFICATIONS_PATH: &str = "/api/notificaciones/";
pub const NOTIFICATIONS_MARK_ALL_PATH: &str = "/api/notificaciones/marcar-todas-leidas/";

/// Default page size of the notification screens
pub const DEFAULT_LIMIT: u32 = 100;
/// Type filter value that matches every kind
pub const ALL_KINDS: &str = "todas";

pub fn notification_path(id: i64) -> String {
    format!("{}{}/", NOTIFICATIONS_PATH, id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub tipo: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub titulo: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub mensaje: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub fecha: String,
    #[serde(default)]
    pub leida: bool,
    #[serde(default, deserialize_with = "string_or_null")]
    pub prioridad: String,
    #[serde(default)]
    pub destinatario: Option<String>,
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        NotificationKind::from_code(&self.tipo)
    }

    pub fn audience_label(&self) -> &'static str {
        match self.destinatario.as_deref() {
            Some("todos") => "Todos",
            Some("clientes") => "Clientes",
            Some("administradores") => "Admins",
            _ => "Específico",
        }
    }

    /// Relative age, or the raw value when the date cannot be parsed
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        match parse_utc(&self.fecha) {
            Some(then) => relative_time(then, now),
            None => self.fecha.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub notificaciones: Vec<Notification>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFilter {
    pub tipo: Option<String>,
    pub leida: Option<bool>,
    pub prioridad: Option<String>,
    pub limite: Option<u32>,
}

impl NotificationFilter {
    /// Filter used by the screens: type from the selector, limit 100
    pub fn for_kind(kind_filter: &str) -> Self {
        Self {
            tipo: Some(kind_filter.to_string()).filter(|k| k != ALL_KINDS && !k.is_empty()),
            limite: Some(DEFAULT_LIMIT),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .push_opt("tipo", self.tipo.as_deref())
            .push_opt("leida", self.leida)
            .push_opt("prioridad", self.prioridad.as_deref())
            .push_opt("limite", self.limite.filter(|l| *l > 0))
    }
}

/// Body of `POST /api/notificaciones/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNotificationDto {
    pub titulo: String,
    pub mensaje: String,
    pub tipo: String,
    pub prioridad: String,
    pub destinatario: String,
    pub usuario_id: Option<i64>,
}

impl Default for CreateNotificationDto {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            mensaje: String::new(),
            tipo: "info".into(),
            prioridad: "normal".into(),
            destinatario: "todos".into(),
            usuario_id: None,
        }
    }
}

impl CreateNotificationDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.titulo.trim().is_empty() || self.mensaje.trim().is_empty() {
            return Err("Por favor completa todos los campos requeridos".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
    pub leida: bool,
}

pub const AUDIENCES: [(&str, &str); 4] = [
    ("todos", "Todos los usuarios"),
    ("clientes", "Solo clientes"),
    ("administradores", "Solo administradores"),
    ("especifico", "Usuario específico"),
];

pub const PRIORITIES: [(&str, &str); 4] = [
    ("baja", "Baja"),
    ("normal", "Normal"),
    ("alta", "Alta"),
    ("urgente", "Urgente"),
];

fn plural(n: i64, word: &str) -> String {
    if n > 1 {
        format!("Hace {} {}s", n, word)
    } else {
        format!("Hace {} {}", n, word)
    }
}

/// "Hace un momento", "Hace 5 minutos", "Hace 1 hora", "Hace 3 días", then `DD/MM/YYYY`
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - then;
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Hace un momento".to_string()
    } else if minutes < 60 {
        plural(minutes, "minuto")
    } else if hours < 24 {
        plural(hours, "hora")
    } else if days < 7 {
        plural(days, "día")
    } else {
        format_date_numeric(&then.naive_utc())
    }
}

/// Client-side filtering: exact kind (or `todas`) and case-insensitive
/// search over title and message
pub fn visible<'a>(list: &'a [Notification], kind_filter: &str, search: &str) -> Vec<&'a Notification> {
    let needle = search.to_lowercase();
    list.iter()
        .filter(|n| kind_filter == ALL_KINDS || n.tipo == kind_filter)
        .filter(|n| {
            needle.is_empty()
                || n.titulo.to_lowercase().contains(&needle)
                || n.mensaje.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn unread_count(list: &[Notification]) -> usize {
    list.iter().filter(|n| !n.leida).count()
}

/// Local state update after a successful PATCH
pub fn mark_read_locally(list: &mut [Notification], id: i64) {
    if let Some(n) = list.iter_mut().find(|n| n.id == id) {
        n.leida = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn notif(id: i64, tipo: &str, titulo: &str, leida: bool) -> Notification {
        Notification {
            id,
            tipo: tipo.into(),
            titulo: titulo.into(),
            mensaje: "Mensaje de prueba".into(),
            fecha: "2024-10-15T10:00:00Z".into(),
            leida,
            prioridad: "normal".into(),
            destinatario: Some("todos".into()),
        }
    }

    #[test]
    fn test_list_with_null_fields() {
        let resp: NotificationListResponse = serde_json::from_value(serde_json::json!({
            "success": true,
            "notificaciones": [
                { "id": 1, "tipo": "oferta", "titulo": "Nueva oferta", "mensaje": "20% en audio", "fecha": "2024-10-15T10:00:00Z", "leida": false, "prioridad": null },
                { "id": 2, "tipo": null, "titulo": "Aviso", "mensaje": null, "fecha": null, "leida": true, "prioridad": "alta" }
            ]
        }))
        .unwrap();

        assert_eq!(resp.notificaciones.len(), 2);
        assert_eq!(resp.notificaciones[0].prioridad, "");
        assert_eq!(resp.notificaciones[1].tipo, "");
        assert_eq!(resp.notificaciones[1].mensaje, "");
        assert_eq!(unread_count(&resp.notificaciones), 1);
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "Hace un momento");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "Hace 1 minuto");
        assert_eq!(relative_time(now - Duration::minutes(45), now), "Hace 45 minutos");
        assert_eq!(relative_time(now - Duration::hours(1), now), "Hace 1 hora");
        assert_eq!(relative_time(now - Duration::hours(5), now), "Hace 5 horas");
        assert_eq!(relative_time(now - Duration::days(1), now), "Hace 1 día");
        assert_eq!(relative_time(now - Duration::days(6), now), "Hace 6 días");
        assert_eq!(relative_time(now - Duration::days(8), now), "07/10/2024");
    }

    #[test]
    fn test_visible_and_unread() {
        let list = vec![
            notif(1, "venta", "Nueva venta", false),
            notif(2, "stock", "Stock bajo", true),
            notif(3, "venta", "Venta anulada", true),
        ];
        assert_eq!(visible(&list, ALL_KINDS, "").len(), 3);
        assert_eq!(visible(&list, "venta", "").len(), 2);
        assert_eq!(visible(&list, ALL_KINDS, "STOCK")[0].id, 2);
        assert_eq!(visible(&list, ALL_KINDS, "prueba").len(), 3);
        assert!(visible(&list, "cupon", "").is_empty());
        assert_eq!(unread_count(&list), 1);
    }

    #[test]
    fn test_mark_read_locally() {
        let mut list = vec![notif(1, "venta", "a", false), notif(2, "venta", "b", false)];
        mark_read_locally(&mut list, 2);
        assert_eq!(unread_count(&list), 1);
        assert!(list[1].leida);
    }

    #[test]
    fn test_filter_query() {
        let f = NotificationFilter::for_kind(ALL_KINDS);
        assert_eq!(f.to_query().to_url(NOTIFICATIONS_LIST_PATH), "/api/notificaciones?limite=100");
        let f = NotificationFilter::for_kind("venta");
        assert_eq!(f.to_query().build(), "?tipo=venta&limite=100");
        let f = NotificationFilter { leida: Some(false), ..Default::default() };
        assert_eq!(f.to_query().build(), "?leida=false");
    }

    #[test]
    fn test_create_dto() {
        let mut dto = CreateNotificationDto::default();
        assert_eq!(dto.tipo, "info");
        assert!(dto.validate().is_err());
        dto.titulo = "Aviso".into();
        dto.mensaje = "Mantenimiento".into();
        assert!(dto.validate().is_ok());
        assert_eq!(notification_path(5), "/api/notificaciones/5/");
    }

    #[test]
    fn test_age_label_and_audience() {
        let n = notif(1, "venta", "a", false);
        let now = Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap();
        assert_eq!(n.age_label(now), "Hace 2 horas");
        assert_eq!(n.audience_label(), "Todos");
        assert_eq!(n.kind(), NotificationKind::Venta);
    }
}
