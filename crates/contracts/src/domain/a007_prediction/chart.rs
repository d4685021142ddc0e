use super::aggregate::Prediction;
use crate::shared::date_utils::parse_timestamp;
use crate::shared::serde_utils::value_as_f64;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Historical,
    Predicted,
}

/// Monthly history row in whatever shape the aggregation endpoint returns
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub fecha: String,
    pub total_ventas: f64,
}

fn first_present<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| raw.get(*k))
        .find(|v| !v.is_null() && v.as_str() != Some(""))
}

impl HistoryPoint {
    /// Date from `fecha|mes|periodo`, value from `total_ventas|ventas|total`
    pub fn normalize(raw: &Value) -> Self {
        let fecha = match first_present(raw, &["fecha", "mes", "periodo"]) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let total_ventas = first_present(raw, &["total_ventas", "ventas", "total"])
            .and_then(value_as_f64)
            .unwrap_or(0.0);
        Self { fecha, total_ventas }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub fecha: String,
    pub valor: f64,
    pub confianza: Option<f64>,
    pub kind: PointKind,
}

impl ChartPoint {
    pub fn is_prediction(&self) -> bool {
        self.kind == PointKind::Predicted
    }
}

/// History and predictions merged in date order; points without a date are dropped.
///
/// Unparseable dates go last, keeping their relative order.
pub fn chart_series(history: &[HistoryPoint], predictions: &[Prediction]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = history
        .iter()
        .map(|h| ChartPoint {
            fecha: h.fecha.clone(),
            valor: h.total_ventas,
            confianza: None,
            kind: PointKind::Historical,
        })
        .chain(predictions.iter().map(|p| ChartPoint {
            fecha: p.fecha_prediccion.clone(),
            valor: p.valor_predicho,
            confianza: Some(p.confianza),
            kind: PointKind::Predicted,
        }))
        .filter(|p| !p.fecha.is_empty())
        .collect();

    points.sort_by_key(|p| {
        let parsed = parse_timestamp(&p.fecha);
        (parsed.is_none(), parsed)
    });
    points
}

/// Bar heights in percent: `(v - min) / (max - min)`, with `max >= 1`,
/// `min <= 0` and a 5 % floor so every bar stays visible
pub fn bar_heights(points: &[ChartPoint]) -> Vec<f64> {
    let max = points.iter().map(|p| p.valor).fold(1.0_f64, f64::max);
    let min = points.iter().map(|p| p.valor).fold(0.0_f64, f64::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    points
        .iter()
        .map(|p| (((p.valor - min) / range) * 100.0).max(5.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_variants() {
        let a = HistoryPoint::normalize(&json!({ "fecha": "2024-08-01", "total_ventas": "1200.5" }));
        assert_eq!(a, HistoryPoint { fecha: "2024-08-01".into(), total_ventas: 1200.5 });

        let b = HistoryPoint::normalize(&json!({ "mes": "2024-09", "ventas": 800 }));
        assert_eq!(b.fecha, "2024-09");
        assert_eq!(b.total_ventas, 800.0);

        let c = HistoryPoint::normalize(&json!({ "periodo": "2024-10-01", "total": null }));
        assert_eq!(c.total_ventas, 0.0);

        let d = HistoryPoint::normalize(&json!({ "fecha": "", "mes": "2024-07-01", "total": "x" }));
        assert_eq!(d.fecha, "2024-07-01");
        assert_eq!(d.total_ventas, 0.0);
    }

    #[test]
    fn test_chart_series_order() {
        let history = vec![
            HistoryPoint { fecha: "2024-09-01".into(), total_ventas: 900.0 },
            HistoryPoint { fecha: "".into(), total_ventas: 10.0 },
            HistoryPoint { fecha: "2024-08-01".into(), total_ventas: 800.0 },
        ];
        let predictions = vec![Prediction {
            fecha_prediccion: "2024-10-01".into(),
            valor_predicho: 1000.0,
            confianza: 0.9,
        }];
        let series = chart_series(&history, &predictions);
        let dates: Vec<_> = series.iter().map(|p| p.fecha.as_str()).collect();
        assert_eq!(dates, vec!["2024-08-01", "2024-09-01", "2024-10-01"]);
        assert!(series[2].is_prediction());
        assert_eq!(series[2].confianza, Some(0.9));
    }

    #[test]
    fn test_unparseable_dates_last() {
        let history = vec![
            HistoryPoint { fecha: "sept".into(), total_ventas: 1.0 },
            HistoryPoint { fecha: "2024-01-01".into(), total_ventas: 2.0 },
        ];
        let series = chart_series(&history, &[]);
        assert_eq!(series[0].fecha, "2024-01-01");
        assert_eq!(series[1].fecha, "sept");
    }

    #[test]
    fn test_bar_heights() {
        let history = vec![
            HistoryPoint { fecha: "2024-01-01".into(), total_ventas: 0.0 },
            HistoryPoint { fecha: "2024-02-01".into(), total_ventas: 50.0 },
            HistoryPoint { fecha: "2024-03-01".into(), total_ventas: 100.0 },
        ];
        let heights = bar_heights(&chart_series(&history, &[]));
        assert_eq!(heights, vec![5.0, 50.0, 100.0]);
    }
}
