//! Notification distribution configuration.

use serde::{Deserialize, Serialize};

/// Tunables for notification fan-out and retention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// How many days before a deadline the approaching sweep starts alerting.
    #[serde(default = "default_alert_window_days")]
    pub alert_window_days: i64,
    /// Read notifications older than this many days are purged by the
    /// retention sweep.
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
    /// Window in hours for the "recent notifications" query.
    #[serde(default = "default_recent_window_hours")]
    pub recent_window_hours: i64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            alert_window_days: default_alert_window_days(),
            retention_days: default_retention_days(),
            recent_window_hours: default_recent_window_hours(),
        }
    }
}

fn default_alert_window_days() -> i64 {
    3
}

fn default_retention_days() -> i64 {
    30
}

fn default_recent_window_hours() -> i64 {
    24
}
