pub mod d400_sales_dashboard;
pub mod d401_dynamic_report;
