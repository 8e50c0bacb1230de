//! Recipient resolution and event-to-notification dispatch.

pub mod dispatcher;
pub mod rules;

pub use dispatcher::NotificationDispatcher;
