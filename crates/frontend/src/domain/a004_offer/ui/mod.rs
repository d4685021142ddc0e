pub mod offers_coupons;
