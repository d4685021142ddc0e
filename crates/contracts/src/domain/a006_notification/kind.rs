use serde::{Deserialize, Serialize};

/// Тип уведомления (определяет цвет и иконку)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Venta,
    Stock,
    Producto,
    Pedido,
    Cupon,
    Oferta,
    Alerta,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    /// Kinds offered by the send form and the type filter
    pub const ALL: [NotificationKind; 8] = [
        NotificationKind::Info,
        NotificationKind::Venta,
        NotificationKind::Stock,
        NotificationKind::Producto,
        NotificationKind::Pedido,
        NotificationKind::Cupon,
        NotificationKind::Oferta,
        NotificationKind::Alerta,
    ];

    pub fn from_code(code: &str) -> Self {
        match code {
            "info" => Self::Info,
            "venta" => Self::Venta,
            "stock" => Self::Stock,
            "producto" => Self::Producto,
            "pedido" => Self::Pedido,
            "cupon" => Self::Cupon,
            "oferta" => Self::Oferta,
            "alerta" => Self::Alerta,
            _ => Self::Other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Venta => "venta",
            Self::Stock => "stock",
            Self::Producto => "producto",
            Self::Pedido => "pedido",
            Self::Cupon => "cupon",
            Self::Oferta => "oferta",
            Self::Alerta => "alerta",
            Self::Other => "otro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Información",
            Self::Venta => "Ventas",
            Self::Stock => "Stock",
            Self::Producto => "Productos",
            Self::Pedido => "Pedidos",
            Self::Cupon => "Cupones",
            Self::Oferta => "Ofertas",
            Self::Alerta => "Alertas",
            Self::Other => "Otros",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Venta | Self::Pedido => "#10B981",
            Self::Stock => "#F59E0B",
            Self::Producto => "#0066FF",
            Self::Alerta => "#EF4444",
            Self::Cupon => "#EC4899",
            Self::Oferta => "#8B5CF6",
            Self::Info | Self::Other => "#6B7280",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Venta => "🛍️",
            Self::Stock | Self::Producto => "📦",
            Self::Pedido => "✅",
            Self::Alerta => "⚠️",
            Self::Cupon => "🎁",
            Self::Oferta => "🏷️",
            Self::Info | Self::Other => "ℹ️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(NotificationKind::from_code("venta").color(), "#10B981");
        assert_eq!(NotificationKind::from_code("pedido").color(), "#10B981");
        assert_eq!(NotificationKind::from_code("stock").color(), "#F59E0B");
        assert_eq!(NotificationKind::from_code("producto").color(), "#0066FF");
        assert_eq!(NotificationKind::from_code("alerta").color(), "#EF4444");
        assert_eq!(NotificationKind::from_code("cupon").color(), "#EC4899");
        assert_eq!(NotificationKind::from_code("oferta").color(), "#8B5CF6");
        assert_eq!(NotificationKind::from_code("sistema").color(), "#6B7280");
    }

    #[test]
    fn test_unknown_kind_deserializes() {
        let kind: NotificationKind = serde_json::from_str("\"sistema\"").unwrap();
        assert_eq!(kind, NotificationKind::Other);
        let kind: NotificationKind = serde_json::from_str("\"cupon\"").unwrap();
        assert_eq!(kind, NotificationKind::Cupon);
    }
}
