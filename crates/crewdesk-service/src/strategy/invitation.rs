//! Team invitation strategy.

use tracing::{debug, error};

use crewdesk_entity::notification::priority::NotificationPriority;
use crewdesk_entity::notification::request::NotificationRequest;

use super::NotificationStrategy;

/// Strategy for team-invitation notifications.
///
/// Requires a recipient, a team, and a non-blank message; defaults the
/// priority to High and derives the join deep link.
#[derive(Debug, Default)]
pub struct InvitationStrategy;

impl NotificationStrategy for InvitationStrategy {
    fn type_tag(&self) -> &'static str {
        "INVITATION"
    }

    fn validate(&self, request: &NotificationRequest) -> bool {
        if request.user_id <= 0 {
            error!("Team invitation without a recipient");
            return false;
        }

        if request.team_id.is_none() {
            error!(user_id = request.user_id, "Team invitation without a team");
            return false;
        }

        if request.message.trim().is_empty() {
            error!(user_id = request.user_id, "Team invitation without a message");
            return false;
        }

        true
    }

    fn process(&self, mut request: NotificationRequest) -> NotificationRequest {
        debug!(user_id = request.user_id, "Processing team invitation");

        if request.priority.is_none() {
            request.priority = Some(NotificationPriority::High);
        }

        if request.link.is_none() {
            if let Some(team_id) = request.team_id {
                request.link = Some(format!("/teams/{team_id}/join"));
            }
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_team_and_message() {
        let strategy = InvitationStrategy;

        let valid = NotificationRequest::new(9, "INVITATION", "You were invited").with_team(7);
        assert!(strategy.validate(&valid));

        let no_team = NotificationRequest::new(9, "INVITATION", "You were invited");
        assert!(!strategy.validate(&no_team));

        let blank_message = NotificationRequest::new(9, "INVITATION", "   ").with_team(7);
        assert!(!strategy.validate(&blank_message));
    }

    #[test]
    fn test_process_derives_join_link_and_high_priority() {
        let strategy = InvitationStrategy;
        let request = NotificationRequest::new(9, "INVITATION", "You were invited").with_team(7);

        let processed = strategy.process(request);
        assert_eq!(processed.priority, Some(NotificationPriority::High));
        assert_eq!(processed.link.as_deref(), Some("/teams/7/join"));
    }

    #[test]
    fn test_process_keeps_explicit_values() {
        let strategy = InvitationStrategy;
        let request = NotificationRequest::new(9, "INVITATION", "You were invited")
            .with_team(7)
            .with_priority(NotificationPriority::Urgent)
            .with_link("/custom");

        let processed = strategy.process(request);
        assert_eq!(processed.priority, Some(NotificationPriority::Urgent));
        assert_eq!(processed.link.as_deref(), Some("/custom"));
    }
}
