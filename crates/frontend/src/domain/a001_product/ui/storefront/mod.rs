//! Storefront: catalog grid with search, category chips and add-to-cart.
//!
//! MVVM split: `view_model.rs` owns the signals and commands, `view.rs`
//! renders them; catalog filtering itself lives in `contracts`.
pub mod view;
pub mod view_model;

pub use view::Storefront;
