//! Period selection and derived figures of the sales dashboard

use super::dto::{MonthlySeries, TopProduct, DASHBOARD_EXPORT_PATH};
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPeriod {
    Months3,
    Months6,
    #[default]
    Months12,
}

impl DashboardPeriod {
    pub const ALL: [DashboardPeriod; 3] = [Self::Months12, Self::Months6, Self::Months3];

    pub fn months(&self) -> usize {
        match self {
            Self::Months3 => 3,
            Self::Months6 => 6,
            Self::Months12 => 12,
        }
    }

    /// Selector value: `3meses`, `6meses`, `12meses`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Months3 => "3meses",
            Self::Months6 => "6meses",
            Self::Months12 => "12meses",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "3meses" => Self::Months3,
            "6meses" => Self::Months6,
            _ => Self::Months12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Months3 => "Últimos 3 meses",
            Self::Months6 => "Últimos 6 meses",
            Self::Months12 => "Últimos 12 meses",
        }
    }

    /// Keep the last N entries of every series
    pub fn window(&self, series: &MonthlySeries) -> MonthlySeries {
        fn tail<T: Clone>(items: &[T], n: usize) -> Vec<T> {
            items[items.len().saturating_sub(n)..].to_vec()
        }
        let n = self.months();
        MonthlySeries {
            labels: tail(&series.labels, n),
            values: tail(&series.values, n),
            heights: tail(&series.heights, n),
        }
    }
}

/// Aggregates over the selected window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodStats {
    pub promedio_mensual: f64,
    pub mes_mejor: f64,
    /// Lowest strictly positive month, 0 when no month sold anything
    pub mes_peor: f64,
    pub total_periodo: f64,
}

impl PeriodStats {
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let total: f64 = values.iter().sum();
        let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = values
            .iter()
            .copied()
            .filter(|v| *v > 0.0)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
            .unwrap_or(0.0);

        Self {
            promedio_mensual: total / values.len() as f64,
            mes_mejor: best,
            mes_peor: worst,
            total_periodo: total,
        }
    }
}

/// SVG polyline points for the trend chart (`width` x `height` canvas,
/// top 50 px left free)
pub fn line_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values.iter().copied().fold(1.0_f64, f64::max);
    let steps = if values.len() > 1 { (values.len() - 1) as f64 } else { 1.0 };
    let plot = height - 50.0;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64 / steps * width, height - v / max * plot))
        .collect()
}

/// Width in percent of each top-product bar relative to the best seller
pub fn top_product_shares(products: &[TopProduct]) -> Vec<f64> {
    let max = products.iter().map(|p| p.sales).fold(1.0_f64, f64::max);
    products.iter().map(|p| p.sales / max * 100.0).collect()
}

pub fn export_path(formato: &str, period: DashboardPeriod) -> String {
    QueryBuilder::new()
        .push("formato", formato)
        .push("periodo", period.months())
        .to_url(DASHBOARD_EXPORT_PATH)
}

/// `dashboard_ventas_2024-10-15.pdf` / `.xlsx`
pub fn export_file_name(formato: &str, today: &str) -> String {
    let ext = if formato == "pdf" { "pdf" } else { "xlsx" };
    format!("dashboard_ventas_{}.{}", today, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> MonthlySeries {
        MonthlySeries {
            labels: (1..=n).map(|i| format!("M{}", i)).collect(),
            values: (1..=n).map(|i| i as f64 * 100.0).collect(),
            heights: (1..=n).map(|i| i as f64).collect(),
        }
    }

    #[test]
    fn test_window() {
        let s = series(12);
        let w = DashboardPeriod::Months3.window(&s);
        assert_eq!(w.labels, vec!["M10", "M11", "M12"]);
        assert_eq!(w.values, vec![1000.0, 1100.0, 1200.0]);
        assert_eq!(w.heights.len(), 3);

        let short = series(2);
        assert_eq!(DashboardPeriod::Months6.window(&short), short);
        assert_eq!(DashboardPeriod::Months12.window(&MonthlySeries::default()), MonthlySeries::default());
    }

    #[test]
    fn test_period_stats() {
        let stats = PeriodStats::compute(&[0.0, 300.0, 100.0, 200.0]);
        assert_eq!(stats.total_periodo, 600.0);
        assert_eq!(stats.promedio_mensual, 150.0);
        assert_eq!(stats.mes_mejor, 300.0);
        assert_eq!(stats.mes_peor, 100.0);
    }

    #[test]
    fn test_period_stats_edge_cases() {
        assert_eq!(PeriodStats::compute(&[]), PeriodStats::default());
        let zeros = PeriodStats::compute(&[0.0, 0.0]);
        assert_eq!(zeros.mes_peor, 0.0);
        assert_eq!(zeros.mes_mejor, 0.0);
    }

    #[test]
    fn test_period_codes() {
        assert_eq!(DashboardPeriod::from_code("6meses"), DashboardPeriod::Months6);
        assert_eq!(DashboardPeriod::from_code("otro"), DashboardPeriod::Months12);
        assert_eq!(DashboardPeriod::default().code(), "12meses");
    }

    #[test]
    fn test_line_points() {
        let pts = line_points(&[0.0, 50.0, 100.0], 800.0, 300.0);
        assert_eq!(pts, vec![(0.0, 300.0), (400.0, 175.0), (800.0, 50.0)]);
        assert_eq!(line_points(&[10.0], 800.0, 300.0)[0].0, 0.0);
    }

    #[test]
    fn test_export() {
        assert_eq!(
            export_path("pdf", DashboardPeriod::Months6),
            "/api/dashboard/dashboard-ventas/exportar/?formato=pdf&periodo=6"
        );
        assert_eq!(export_file_name("excel", "2024-10-15"), "dashboard_ventas_2024-10-15.xlsx");
    }

    #[test]
    fn test_top_product_shares() {
        let products = vec![
            TopProduct { name: "A".into(), sales: 20.0, revenue: 0.0 },
            TopProduct { name: "B".into(), sales: 5.0, revenue: 0.0 },
        ];
        assert_eq!(top_product_shares(&products), vec![100.0, 25.0]);
    }
}
