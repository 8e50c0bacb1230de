//! Stream payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unread-count snapshot pushed whenever a user's unread set changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCountUpdate {
    /// The user the count belongs to.
    pub user_id: i64,
    /// Number of unread notifications at `timestamp`.
    pub count: i64,
    /// When the count was computed.
    pub timestamp: DateTime<Utc>,
}

impl UnreadCountUpdate {
    /// Build a snapshot stamped with the current time.
    pub fn now(user_id: i64, count: i64) -> Self {
        Self {
            user_id,
            count,
            timestamp: Utc::now(),
        }
    }
}
