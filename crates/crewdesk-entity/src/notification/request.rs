//! Notification creation request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::priority::NotificationPriority;

/// Builder-style value describing a notification to be created.
///
/// Constructed by the dispatcher (or the transport layer for interactive
/// creates), then validated and enriched by the matching strategy before
/// persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// The recipient user.
    pub user_id: i64,
    /// Type tag selecting the processing strategy.
    pub type_tag: String,
    /// Notification body text.
    pub message: String,
    /// The team the notification relates to, if any.
    pub team_id: Option<i64>,
    /// The course the notification relates to, if any.
    pub course_id: Option<i64>,
    /// Additional structured data (JSON).
    pub metadata: Option<serde_json::Value>,
    /// Priority level; strategies fill a default when absent.
    pub priority: Option<NotificationPriority>,
    /// Deep link for the UI action; strategies may derive one.
    pub link: Option<String>,
    /// When the notification stops being relevant for display.
    pub expires_at: Option<DateTime<Utc>>,
}

impl NotificationRequest {
    /// Create a request with the mandatory fields.
    pub fn new(user_id: i64, type_tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id,
            type_tag: type_tag.into(),
            message: message.into(),
            team_id: None,
            course_id: None,
            metadata: None,
            priority: None,
            link: None,
            expires_at: None,
        }
    }

    /// Attach a team ID.
    pub fn with_team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Attach a course ID.
    pub fn with_course(mut self, course_id: i64) -> Self {
        self.course_id = Some(course_id);
        self
    }

    /// Attach structured metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set an explicit priority.
    pub fn with_priority(mut self, priority: NotificationPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set a deep link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set an expiry timestamp.
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}
