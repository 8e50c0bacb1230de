//! Strategy registry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crewdesk_core::error::AppError;
use crewdesk_core::result::AppResult;
use crewdesk_entity::notification::request::NotificationRequest;

use super::deadline::DeadlineReminderStrategy;
use super::generic::GenericStrategy;
use super::invitation::InvitationStrategy;
use super::NotificationStrategy;

/// Maps a notification type tag to its strategy.
///
/// Built once at startup and read-only afterwards, so lookups need no
/// locking. Unknown tags resolve to the mandatory default strategy.
pub struct StrategyRegistry {
    strategies: HashMap<&'static str, Arc<dyn NotificationStrategy>>,
    default: Arc<dyn NotificationStrategy>,
}

impl StrategyRegistry {
    /// Build a registry from a strategy list and the mandatory default.
    pub fn new(
        strategies: Vec<Arc<dyn NotificationStrategy>>,
        default: Arc<dyn NotificationStrategy>,
    ) -> Self {
        let mut map: HashMap<&'static str, Arc<dyn NotificationStrategy>> = HashMap::new();
        for strategy in strategies {
            info!(type_tag = strategy.type_tag(), "Registered notification strategy");
            map.insert(strategy.type_tag(), strategy);
        }

        Self {
            strategies: map,
            default,
        }
    }

    /// Build the registry with the built-in strategies.
    pub fn with_defaults() -> Self {
        Self::new(
            vec![
                Arc::new(InvitationStrategy),
                Arc::new(DeadlineReminderStrategy),
            ],
            Arc::new(GenericStrategy),
        )
    }

    /// Resolve the strategy for a type tag, falling back to the default.
    ///
    /// Never fails.
    pub fn resolve(&self, type_tag: &str) -> &dyn NotificationStrategy {
        self.strategies
            .get(type_tag)
            .map(Arc::as_ref)
            .unwrap_or_else(|| self.default.as_ref())
    }

    /// Validate and enrich a request with its type's strategy.
    ///
    /// Fails with a validation error naming the offending type when the
    /// strategy rejects the request. Callers inside event fan-out must
    /// treat that error as non-fatal for the remaining recipients.
    pub fn process_notification(
        &self,
        request: NotificationRequest,
    ) -> AppResult<NotificationRequest> {
        let strategy = self.resolve(&request.type_tag);

        debug!(
            type_tag = %request.type_tag,
            strategy = strategy.type_tag(),
            user_id = request.user_id,
            "Processing notification request"
        );

        if !strategy.validate(&request) {
            return Err(AppError::validation(format!(
                "Notification of type '{}' is not valid",
                request.type_tag
            )));
        }

        Ok(strategy.process(request))
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("registered", &self.strategies.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdesk_core::error::ErrorKind;
    use crewdesk_entity::notification::priority::NotificationPriority;

    #[test]
    fn test_resolve_exact_match() {
        let registry = StrategyRegistry::with_defaults();
        assert_eq!(registry.resolve("INVITATION").type_tag(), "INVITATION");
        assert_eq!(registry.resolve("DEADLINE").type_tag(), "DEADLINE");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        let registry = StrategyRegistry::with_defaults();
        assert_eq!(registry.resolve("TEAM").type_tag(), "GENERIC");
        assert_eq!(registry.resolve("").type_tag(), "GENERIC");
    }

    #[test]
    fn test_fallback_processing_succeeds_for_wellformed_request() {
        let registry = StrategyRegistry::with_defaults();
        let request = NotificationRequest::new(1, "SOMETHING_NEW", "hello");

        let processed = registry.process_notification(request).unwrap();
        assert_eq!(processed.priority, Some(NotificationPriority::Normal));
    }

    #[test]
    fn test_validation_failure_names_the_type() {
        let registry = StrategyRegistry::with_defaults();
        // Invitation without a team fails its strategy's validation.
        let request = NotificationRequest::new(9, "INVITATION", "hello");

        let err = registry.process_notification(request).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("INVITATION"));
    }
}
