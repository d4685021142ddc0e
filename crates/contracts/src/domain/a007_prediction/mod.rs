pub mod aggregate;
pub mod chart;
pub mod model;

pub use aggregate::*;
pub use chart::{bar_heights, chart_series, ChartPoint, HistoryPoint, PointKind};
pub use model::*;
