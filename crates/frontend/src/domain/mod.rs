pub mod a001_product;
pub mod a002_cart;
pub mod a003_sale;
pub mod a004_offer;
pub mod a005_coupon;
pub mod a006_notification;
pub mod a007_prediction;
