//! Domain events describing things that happened to a team.
//!
//! Events are transient: produced by the team-management layer (or the
//! deadline sweeps), published on the event bus, consumed by the
//! notification dispatcher, and then discarded. Nothing here is persisted.

pub mod kind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use kind::EventKind;

/// A transient record of something that happened to a team.
///
/// Immutable once constructed. The `origin_user_id` field is overloaded:
/// for most kinds it carries the acting user (excluded from fan-out), but
/// for [`EventKind::InvitationSent`] it carries the invitee, who is then
/// the sole recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event instance ID (diagnostic only, never persisted).
    pub id: Uuid,
    /// The team the event concerns.
    pub team_id: i64,
    /// What happened.
    pub kind: EventKind,
    /// The acting user, or the invitee for invitation events.
    pub origin_user_id: Option<i64>,
    /// Free-text detail used verbatim as the notification message when present.
    pub details: Option<String>,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Opaque key/value metadata merged into each notification's metadata.
    pub metadata: Option<serde_json::Value>,
}

impl DomainEvent {
    /// Create a new domain event stamped with the current time.
    pub fn new(
        team_id: i64,
        kind: EventKind,
        origin_user_id: Option<i64>,
        details: Option<String>,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            kind,
            origin_user_id,
            details,
            timestamp: Utc::now(),
            metadata,
        }
    }
}

/// Lightweight per-team stream payload for live UI updates.
///
/// Carries the event shape without the per-recipient notification records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummary {
    /// The team the event concerns.
    pub team_id: i64,
    /// What happened.
    pub kind: EventKind,
    /// Human-readable description of the event.
    pub description: String,
    /// The acting user (or invitee for invitations), if any.
    pub origin_user_id: Option<i64>,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
}

impl EventSummary {
    /// Build a summary from a domain event.
    pub fn from_event(event: &DomainEvent) -> Self {
        Self {
            team_id: event.team_id,
            kind: event.kind,
            description: event
                .details
                .clone()
                .unwrap_or_else(|| event.kind.default_description().to_string()),
            origin_user_id: event.origin_user_id,
            timestamp: event.timestamp,
        }
    }
}
