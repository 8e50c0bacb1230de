//! Deadline reminder strategy.

use tracing::{debug, error};

use crewdesk_entity::notification::priority::NotificationPriority;
use crewdesk_entity::notification::request::NotificationRequest;

use super::NotificationStrategy;

/// Strategy for deadline approaching/reached reminders.
///
/// Requires a recipient and a team; defaults the priority to High and
/// derives a deep link to the team page.
#[derive(Debug, Default)]
pub struct DeadlineReminderStrategy;

impl NotificationStrategy for DeadlineReminderStrategy {
    fn type_tag(&self) -> &'static str {
        "DEADLINE"
    }

    fn validate(&self, request: &NotificationRequest) -> bool {
        if request.user_id <= 0 {
            error!("Deadline reminder without a recipient");
            return false;
        }

        if request.team_id.is_none() {
            error!(user_id = request.user_id, "Deadline reminder without a team");
            return false;
        }

        true
    }

    fn process(&self, mut request: NotificationRequest) -> NotificationRequest {
        debug!(user_id = request.user_id, "Processing deadline reminder");

        if request.priority.is_none() {
            request.priority = Some(NotificationPriority::High);
        }

        if request.link.is_none() {
            if let Some(team_id) = request.team_id {
                request.link = Some(format!("/teams/{team_id}"));
            }
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_team() {
        let strategy = DeadlineReminderStrategy;

        let valid = NotificationRequest::new(3, "DEADLINE", "2 days remaining").with_team(7);
        assert!(strategy.validate(&valid));

        let no_team = NotificationRequest::new(3, "DEADLINE", "2 days remaining");
        assert!(!strategy.validate(&no_team));
    }

    #[test]
    fn test_process_derives_team_link() {
        let strategy = DeadlineReminderStrategy;
        let request = NotificationRequest::new(3, "DEADLINE", "2 days remaining").with_team(7);

        let processed = strategy.process(request);
        assert_eq!(processed.priority, Some(NotificationPriority::High));
        assert_eq!(processed.link.as_deref(), Some("/teams/7"));
    }
}
