//! Dynamic reports screen: text or voice request, admin filters, rendered
//! result and report history.

mod report_view;
mod view;
pub mod view_model;

pub use view::DynamicReports;
