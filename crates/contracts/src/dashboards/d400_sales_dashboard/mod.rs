pub mod dto;
pub mod stats;

pub use dto::*;
pub use stats::*;
