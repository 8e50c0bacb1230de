//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::priority::NotificationPriority;

/// A persisted notification owned by a single recipient.
///
/// `read_at` is set if and only if `is_read` is true, and only on the
/// first read transition. `created_at` never changes after insertion.
/// A notification past `expires_at` is still returned by reads until the
/// retention sweep purges it; expiry is a display hint, not auto-deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: i64,
    /// The recipient user. Exposed so the calling layer can enforce
    /// ownership on mark-read/delete.
    pub user_id: i64,
    /// Notification body text.
    pub message: String,
    /// Type tag selecting the processing strategy (e.g. "INVITATION").
    pub type_tag: String,
    /// Whether the recipient has read this notification.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// When the notification was read (first transition only).
    pub read_at: Option<DateTime<Utc>>,
    /// The team the notification relates to, if any.
    pub team_id: Option<i64>,
    /// The course the notification relates to, if any.
    pub course_id: Option<i64>,
    /// Priority level.
    pub priority: NotificationPriority,
    /// Deep link for the UI action, if any.
    pub link: Option<String>,
    /// Additional structured data (JSON).
    pub metadata: Option<serde_json::Value>,
    /// When the notification stops being relevant for display.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Check if the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
