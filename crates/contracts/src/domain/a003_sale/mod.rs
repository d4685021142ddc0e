pub mod aggregate;
pub mod filter;

pub use aggregate::*;
pub use filter::SaleFilter;
