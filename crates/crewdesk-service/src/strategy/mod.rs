//! Per-type notification validation and enrichment strategies.

pub mod deadline;
pub mod generic;
pub mod invitation;
pub mod registry;

use crewdesk_entity::notification::request::NotificationRequest;

pub use registry::StrategyRegistry;

/// Validation and pure enrichment for one notification type.
///
/// Strategies never touch storage; `process` only fills defaults
/// (priority, deep link) the request is missing.
pub trait NotificationStrategy: Send + Sync {
    /// The type tag this strategy owns (e.g. "INVITATION").
    fn type_tag(&self) -> &'static str;

    /// Whether the request satisfies this type's requirements.
    fn validate(&self, request: &NotificationRequest) -> bool;

    /// Enrich the request with type-specific defaults.
    fn process(&self, request: NotificationRequest) -> NotificationRequest;
}
