//! Natural-language ("dynamic") reports: request building and rendering of
//! the arbitrary JSON the report service returns.

pub mod format;
pub mod renderer;
pub mod request;

pub use renderer::{render, RenderedReport, ReportTable, StructuredField, SummaryItem, TableCell, TableRow};
pub use request::*;
