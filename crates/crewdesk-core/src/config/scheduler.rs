//! Sweep scheduler configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the periodic deadline and retention sweeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Whether the sweep scheduler is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the approaching-deadline sweep.
    #[serde(default = "default_approaching_cron")]
    pub approaching_cron: String,
    /// Cron expression for the reached-deadline sweep.
    #[serde(default = "default_reached_cron")]
    pub reached_cron: String,
    /// Cron expression for the retention cleanup sweep.
    #[serde(default = "default_retention_cron")]
    pub retention_cron: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            approaching_cron: default_approaching_cron(),
            reached_cron: default_reached_cron(),
            retention_cron: default_retention_cron(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Every 6 hours on the hour.
fn default_approaching_cron() -> String {
    "0 0 */6 * * *".to_string()
}

/// Every hour on the hour.
fn default_reached_cron() -> String {
    "0 0 * * * *".to_string()
}

/// Daily at 2 AM, off-peak.
fn default_retention_cron() -> String {
    "0 0 2 * * *".to_string()
}
