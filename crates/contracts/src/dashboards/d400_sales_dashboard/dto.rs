use crate::shared::serde_utils::{f64_lenient, string_or_null, vec_f64_lenient};
use serde::{Deserialize, Serialize};

pub const DASHBOARD_STATS_PATH: &str = "/api/ventas/dashboard/stats/";
pub const DASHBOARD_EXPORT_PATH: &str = "/api/dashboard/dashboard-ventas/exportar/";

/// Metric card value with its change against the previous period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    #[serde(default, deserialize_with = "f64_lenient")]
    pub value: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub change: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub ventas_mes: MetricValue,
    #[serde(default)]
    pub total_pedidos: MetricValue,
    #[serde(default)]
    pub nuevos_clientes: MetricValue,
}

/// Monthly series; `heights` are bar heights in percent computed by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "vec_f64_lenient")]
    pub values: Vec<f64>,
    #[serde(default, deserialize_with = "vec_f64_lenient")]
    pub heights: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub sales: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub revenue: f64,
}

/// Response of `GET /api/ventas/dashboard/stats/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    #[serde(default)]
    pub stats: DashboardMetrics,
    #[serde(default)]
    pub ventas_mensuales: MonthlySeries,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_stats() {
        let resp: DashboardStatsResponse = serde_json::from_value(json!({
            "success": true,
            "stats": {
                "ventas_mes": { "value": "15230.50", "change": 12.4 },
                "total_pedidos": { "value": 87, "change": -3 }
            },
            "ventas_mensuales": {
                "labels": ["Ago", "Sep", "Oct"],
                "values": [1000, "1500.5", null],
                "heights": [40, 60, 0]
            },
            "top_products": [{ "name": "Laptop", "sales": 12, "revenue": 48000 }]
        }))
        .unwrap();
        assert_eq!(resp.stats.ventas_mes.value, 15230.5);
        assert_eq!(resp.stats.total_pedidos.change, -3.0);
        assert_eq!(resp.stats.nuevos_clientes, MetricValue::default());
        assert_eq!(resp.ventas_mensuales.values, vec![1000.0, 1500.5, 0.0]);
        assert_eq!(resp.top_products[0].revenue, 48000.0);
    }
}
