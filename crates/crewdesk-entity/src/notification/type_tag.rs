//! Notification type tags and their mapping from event kinds.

use serde::{Deserialize, Serialize};

use crewdesk_core::events::EventKind;

/// Category of a notification, stored as its string tag.
///
/// The tag selects the processing strategy; unregistered tags fall back
/// to the generic strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    /// Team invitation for a single user.
    Invitation,
    /// Deadline approaching/reached reminders.
    Deadline,
    /// Disruptive team changes (deletion, deadline moved).
    Alert,
    /// Task assignment and completion.
    Task,
    /// General team lifecycle events.
    Team,
}

impl NotificationType {
    /// Return the type tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invitation => "INVITATION",
            Self::Deadline => "DEADLINE",
            Self::Alert => "ALERT",
            Self::Task => "TASK",
            Self::Team => "TEAM",
        }
    }

    /// Fixed mapping from an event kind to the notification type tag.
    pub fn for_event(kind: EventKind) -> Self {
        match kind {
            EventKind::InvitationSent => Self::Invitation,
            EventKind::DeadlineApproaching | EventKind::DeadlineReached => Self::Deadline,
            EventKind::TeamDeleted | EventKind::DeadlineUpdated => Self::Alert,
            EventKind::TaskAssigned | EventKind::TaskCompleted => Self::Task,
            _ => Self::Team,
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_mapping() {
        assert_eq!(
            NotificationType::for_event(EventKind::InvitationSent),
            NotificationType::Invitation
        );
        assert_eq!(
            NotificationType::for_event(EventKind::DeadlineApproaching),
            NotificationType::Deadline
        );
        assert_eq!(
            NotificationType::for_event(EventKind::DeadlineReached),
            NotificationType::Deadline
        );
        assert_eq!(
            NotificationType::for_event(EventKind::TeamDeleted),
            NotificationType::Alert
        );
        assert_eq!(
            NotificationType::for_event(EventKind::DeadlineUpdated),
            NotificationType::Alert
        );
        assert_eq!(
            NotificationType::for_event(EventKind::TaskAssigned),
            NotificationType::Task
        );
        assert_eq!(
            NotificationType::for_event(EventKind::TeamCreated),
            NotificationType::Team
        );
        assert_eq!(
            NotificationType::for_event(EventKind::MemberJoined),
            NotificationType::Team
        );
    }
}
