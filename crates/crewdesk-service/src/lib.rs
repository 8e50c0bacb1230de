//! # crewdesk-service
//!
//! The distribution pipeline of CrewDesk Notify: the in-process event
//! bus, the recipient resolver and dispatcher, the per-type strategy
//! registry, the event intake and sweep synthesis, and the interactive
//! notification facade the transport layer calls.

pub mod bus;
pub mod dispatch;
pub mod events;
pub mod notification;
pub mod strategy;

pub use bus::{EventBus, EventHandler};
