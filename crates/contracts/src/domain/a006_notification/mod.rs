pub mod aggregate;
pub mod kind;

pub use aggregate::*;
pub use kind::NotificationKind;
