//! Team event kind enumeration and its fixed notification facets.

use serde::{Deserialize, Serialize};

/// Closed enumeration of everything that can happen to a team.
///
/// Each kind carries two fixed facets: whether it is critical (forces
/// high-priority notifications) and whether it fans out to every team
/// member or only to the explicitly named recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// A new team was created.
    TeamCreated,
    /// A user was invited to join the team.
    InvitationSent,
    /// A user joined the team.
    MemberJoined,
    /// A user left the team.
    MemberLeft,
    /// The team deadline was changed.
    DeadlineUpdated,
    /// The team deadline falls within the alert window.
    DeadlineApproaching,
    /// The team deadline has passed.
    DeadlineReached,
    /// Team name/description was updated.
    TeamUpdated,
    /// The team was deleted.
    TeamDeleted,
    /// The team leader changed.
    LeaderChanged,
    /// The team reached its member limit.
    MemberLimitReached,
    /// A task was assigned to the team.
    TaskAssigned,
    /// A team task was completed.
    TaskCompleted,
}

impl EventKind {
    /// Whether the event is critical and forces a high-priority notification.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::DeadlineReached | Self::TeamDeleted | Self::DeadlineApproaching
        )
    }

    /// Whether the event fans out to every team member.
    ///
    /// Invitations go only to the invited user carried in the event's
    /// origin field.
    pub fn notify_all(&self) -> bool {
        !matches!(self, Self::InvitationSent)
    }

    /// Default human-readable description, used when the event carries
    /// no free-text details.
    pub fn default_description(&self) -> &'static str {
        match self {
            Self::TeamCreated => "A new team has been created",
            Self::InvitationSent => "You have been invited to join a team",
            Self::MemberJoined => "A new member has joined the team",
            Self::MemberLeft => "A member has left the team",
            Self::DeadlineUpdated => "The team deadline has been updated",
            Self::DeadlineApproaching => "The team deadline is approaching",
            Self::DeadlineReached => "The team deadline has been reached",
            Self::TeamUpdated => "The team information has been updated",
            Self::TeamDeleted => "The team has been deleted",
            Self::LeaderChanged => "The team leader has changed",
            Self::MemberLimitReached => "The team has reached its member limit",
            Self::TaskAssigned => "A new task has been assigned to the team",
            Self::TaskCompleted => "A team task has been completed",
        }
    }

    /// Stable string form used in notification metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TeamCreated => "TEAM_CREATED",
            Self::InvitationSent => "INVITATION_SENT",
            Self::MemberJoined => "MEMBER_JOINED",
            Self::MemberLeft => "MEMBER_LEFT",
            Self::DeadlineUpdated => "DEADLINE_UPDATED",
            Self::DeadlineApproaching => "DEADLINE_APPROACHING",
            Self::DeadlineReached => "DEADLINE_REACHED",
            Self::TeamUpdated => "TEAM_UPDATED",
            Self::TeamDeleted => "TEAM_DELETED",
            Self::LeaderChanged => "LEADER_CHANGED",
            Self::MemberLimitReached => "MEMBER_LIMIT_REACHED",
            Self::TaskAssigned => "TASK_ASSIGNED",
            Self::TaskCompleted => "TASK_COMPLETED",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_kinds() {
        assert!(EventKind::DeadlineReached.is_critical());
        assert!(EventKind::DeadlineApproaching.is_critical());
        assert!(EventKind::TeamDeleted.is_critical());
        assert!(!EventKind::TeamCreated.is_critical());
        assert!(!EventKind::InvitationSent.is_critical());
    }

    #[test]
    fn test_only_invitations_target_a_single_user() {
        assert!(!EventKind::InvitationSent.notify_all());
        assert!(EventKind::TeamCreated.notify_all());
        assert!(EventKind::MemberLeft.notify_all());
        assert!(EventKind::TaskCompleted.notify_all());
    }
}
