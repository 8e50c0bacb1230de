//! Notification priority enumeration.

use serde::{Deserialize, Serialize};

/// Priority level of a notification, stored as TEXT.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationPriority {
    /// Background information.
    Low,
    /// Standard events.
    Normal,
    /// Important events requiring attention.
    High,
    /// Requires immediate attention.
    Urgent,
}

impl NotificationPriority {
    /// Return the priority as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }

    /// Parse from a string, falling back to `Normal` for unknown values.
    pub fn from_str_value(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "LOW" => Self::Low,
            "HIGH" => Self::High,
            "URGENT" => Self::Urgent,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_falls_back_to_normal() {
        assert_eq!(NotificationPriority::from_str_value("high"), NotificationPriority::High);
        assert_eq!(NotificationPriority::from_str_value("bogus"), NotificationPriority::Normal);
        assert_eq!(NotificationPriority::from_str_value(""), NotificationPriority::Normal);
    }
}
