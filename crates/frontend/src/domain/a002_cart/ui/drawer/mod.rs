//! Slide-in cart: quantities, saved-for-later items, coupon and checkout
pub mod view;
pub mod view_model;

pub use view::CartDrawer;
pub use view_model::reload_cart_count;
