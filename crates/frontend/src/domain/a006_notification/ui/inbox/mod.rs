//! Notification inbox. Admins additionally get the send form and audience
//! badges; clients can only read, mark and delete.

pub mod view;
pub mod view_model;

pub use view::NotificationsPage;
