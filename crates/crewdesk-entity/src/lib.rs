//! # crewdesk-entity
//!
//! Persistent and value models for CrewDesk Notify: notification records,
//! creation requests, priority and type-tag enums, and the read-side team
//! model consumed from the platform's CRUD layer.

pub mod notification;
pub mod team;

pub use notification::{Notification, NotificationPriority, NotificationRequest, NotificationType};
pub use team::Team;
