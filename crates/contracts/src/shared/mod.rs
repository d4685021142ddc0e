pub mod api;
pub mod config;
pub mod date_utils;
pub mod number_format;
pub mod options;
pub mod query;
pub mod serde_utils;
pub mod text;
