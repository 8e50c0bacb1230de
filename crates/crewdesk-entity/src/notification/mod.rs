//! Notification domain entities.

pub mod model;
pub mod priority;
pub mod request;
pub mod type_tag;

pub use model::Notification;
pub use priority::NotificationPriority;
pub use request::NotificationRequest;
pub use type_tag::NotificationType;
