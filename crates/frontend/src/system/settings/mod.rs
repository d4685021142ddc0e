//! Store settings screen, persisted in the browser
pub mod storage;
pub mod view;

pub use view::SettingsPage;
