//! Concrete repository implementations.

pub mod notification;
pub mod team;
pub mod user;

pub use notification::NotificationRepository;
pub use team::TeamRepository;
pub use user::UserRepository;
