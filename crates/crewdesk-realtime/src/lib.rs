//! # crewdesk-realtime
//!
//! Live delivery channels for CrewDesk Notify: per-user notification
//! streams, per-team event-summary streams, and per-user unread-count
//! streams, all built on keyed `tokio::sync::broadcast` channels.
//!
//! Streams never replay history; a client that connects after an event
//! must re-fetch via the query API.

pub mod hub;
pub mod publisher;
pub mod types;

pub use hub::BroadcastHub;
pub use publisher::RealtimePublisher;
pub use types::UnreadCountUpdate;
