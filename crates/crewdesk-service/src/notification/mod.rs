//! Notification persistence and query service.

pub mod service;

pub use service::NotificationService;
