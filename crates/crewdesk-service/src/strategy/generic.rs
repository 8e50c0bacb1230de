//! Generic fallback strategy.

use tracing::{debug, error};

use crewdesk_entity::notification::priority::NotificationPriority;
use crewdesk_entity::notification::request::NotificationRequest;

use super::NotificationStrategy;

/// Fallback strategy for notification types with no dedicated strategy.
///
/// Requires a recipient, a non-blank message, and a non-blank type tag;
/// defaults the priority to Normal.
#[derive(Debug, Default)]
pub struct GenericStrategy;

impl NotificationStrategy for GenericStrategy {
    fn type_tag(&self) -> &'static str {
        "GENERIC"
    }

    fn validate(&self, request: &NotificationRequest) -> bool {
        if request.user_id <= 0 {
            error!("Generic notification without a recipient");
            return false;
        }

        if request.message.trim().is_empty() {
            error!(user_id = request.user_id, "Generic notification without a message");
            return false;
        }

        if request.type_tag.trim().is_empty() {
            error!(user_id = request.user_id, "Generic notification without a type");
            return false;
        }

        true
    }

    fn process(&self, mut request: NotificationRequest) -> NotificationRequest {
        debug!(user_id = request.user_id, "Processing generic notification");

        if request.priority.is_none() {
            request.priority = Some(NotificationPriority::Normal);
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_message_and_type() {
        let strategy = GenericStrategy;

        assert!(strategy.validate(&NotificationRequest::new(1, "TEAM", "hello")));
        assert!(!strategy.validate(&NotificationRequest::new(1, "TEAM", "  ")));
        assert!(!strategy.validate(&NotificationRequest::new(1, "", "hello")));
        assert!(!strategy.validate(&NotificationRequest::new(0, "TEAM", "hello")));
    }

    #[test]
    fn test_process_defaults_normal_priority() {
        let strategy = GenericStrategy;
        let processed = strategy.process(NotificationRequest::new(1, "TEAM", "hello"));
        assert_eq!(processed.priority, Some(NotificationPriority::Normal));
    }
}
