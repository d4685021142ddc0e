//! Admin page with two tabs: time-limited offers (with AI suggestions) and
//! discount coupons.

pub mod view;
pub mod view_model;

pub use view::OffersCouponsPage;
