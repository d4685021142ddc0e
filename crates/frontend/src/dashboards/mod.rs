pub mod d400_sales_dashboard;
pub mod d401_dynamic_report;

pub use d400_sales_dashboard::ui::SalesDashboard;
pub use d401_dynamic_report::ui::DynamicReports;
