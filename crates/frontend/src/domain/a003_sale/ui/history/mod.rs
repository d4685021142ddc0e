//! Sales history ("Mis compras" for clients).
//!
//! MVVM: `view_model.rs` keeps the filter, the loaded page and the expanded
//! row; every filter change reloads from page 1.
pub mod view;
pub mod view_model;

pub use view::SalesHistory;
