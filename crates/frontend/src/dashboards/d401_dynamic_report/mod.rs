pub mod api;
pub mod speech;
pub mod ui;
