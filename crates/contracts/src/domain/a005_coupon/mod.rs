pub mod aggregate;
pub mod code;
pub mod form;

pub use aggregate::*;
pub use code::{coupon_code_from_bytes, generate_coupon_code, COUPON_CODE_LEN};
pub use form::CouponForm;
