//! Cron scheduler for the periodic sweeps.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use crewdesk_core::config::notifications::NotificationsConfig;
use crewdesk_core::config::scheduler::SchedulerConfig;
use crewdesk_core::error::AppError;
use crewdesk_database::repositories::notification::NotificationRepository;
use crewdesk_service::events::TeamEventService;

/// Cron-based scheduler for the deadline and retention sweeps.
///
/// Sweep bodies catch and log their own errors; a failing run never
/// unregisters the schedule.
pub struct SweepScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Sweep logic shared with the event pipeline
    events: Arc<TeamEventService>,
    /// Repository used by the retention cleanup
    notifications: NotificationRepository,
    /// Cron expressions and enablement
    config: SchedulerConfig,
    /// Retention window tunables
    retention: NotificationsConfig,
}

impl std::fmt::Debug for SweepScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepScheduler").finish()
    }
}

impl SweepScheduler {
    /// Create a new sweep scheduler
    pub async fn new(
        events: Arc<TeamEventService>,
        notifications: NotificationRepository,
        config: SchedulerConfig,
        retention: NotificationsConfig,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self {
            scheduler,
            events,
            notifications,
            config,
            retention,
        })
    }

    /// Register all sweeps
    pub async fn register_sweeps(&self) -> Result<(), AppError> {
        self.register_approaching_sweep().await?;
        self.register_reached_sweep().await?;
        self.register_retention_sweep().await?;

        tracing::info!("All sweeps registered");
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Sweep scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Sweep scheduler shut down");
        Ok(())
    }

    /// Approaching-deadline sweep — every 6 hours by default
    async fn register_approaching_sweep(&self) -> Result<(), AppError> {
        let events = Arc::clone(&self.events);
        let job = CronJob::new_async(self.config.approaching_cron.as_str(), move |_uuid, _lock| {
            let events = Arc::clone(&events);
            Box::pin(async move {
                tracing::debug!("Running approaching-deadline sweep");
                match events.sweep_approaching_deadlines().await {
                    Ok(alerted) => {
                        tracing::debug!(alerted, "Approaching-deadline sweep finished");
                    }
                    Err(e) => {
                        tracing::error!("Approaching-deadline sweep failed: {}", e);
                    }
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create approaching sweep schedule: {}", e))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add approaching sweep schedule: {}", e))
        })?;

        tracing::info!(cron = %self.config.approaching_cron, "Registered: approaching-deadline sweep");
        Ok(())
    }

    /// Reached-deadline sweep — hourly by default
    async fn register_reached_sweep(&self) -> Result<(), AppError> {
        let events = Arc::clone(&self.events);
        let job = CronJob::new_async(self.config.reached_cron.as_str(), move |_uuid, _lock| {
            let events = Arc::clone(&events);
            Box::pin(async move {
                tracing::debug!("Running reached-deadline sweep");
                match events.sweep_reached_deadlines().await {
                    Ok(alerted) => {
                        tracing::debug!(alerted, "Reached-deadline sweep finished");
                    }
                    Err(e) => {
                        tracing::error!("Reached-deadline sweep failed: {}", e);
                    }
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create reached sweep schedule: {}", e))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add reached sweep schedule: {}", e))
        })?;

        tracing::info!(cron = %self.config.reached_cron, "Registered: reached-deadline sweep");
        Ok(())
    }

    /// Retention cleanup — daily at 2 AM by default
    ///
    /// Purges notifications that are read AND older than the retention
    /// window; unread notifications are kept indefinitely.
    async fn register_retention_sweep(&self) -> Result<(), AppError> {
        let notifications = self.notifications.clone();
        let retention_days = self.retention.retention_days;
        let job = CronJob::new_async(self.config.retention_cron.as_str(), move |_uuid, _lock| {
            let notifications = notifications.clone();
            Box::pin(async move {
                tracing::debug!("Running retention cleanup");
                let cutoff = retention_cutoff(Utc::now(), retention_days);
                match notifications.delete_old_read(cutoff).await {
                    Ok(purged) => {
                        if purged > 0 {
                            tracing::info!(purged, "Retention cleanup purged notifications");
                        }
                    }
                    Err(e) => {
                        tracing::error!("Retention cleanup failed: {}", e);
                    }
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create retention sweep schedule: {}", e))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add retention sweep schedule: {}", e))
        })?;

        tracing::info!(cron = %self.config.retention_cron, "Registered: retention cleanup");
        Ok(())
    }
}

/// Cutoff timestamp for the retention cleanup.
///
/// Read notifications with `read_at` strictly before the cutoff are
/// purged; unread notifications are never touched regardless of age.
fn retention_cutoff(now: DateTime<Utc>, retention_days: i64) -> DateTime<Utc> {
    now - Duration::days(retention_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_retention_cutoff_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 3, 31, 2, 0, 0).unwrap();
        let cutoff = retention_cutoff(now, 30);
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2026, 3, 1, 2, 0, 0).unwrap());

        // Purge condition is `read_at < cutoff`.
        let read_29_days_ago = now - Duration::days(29);
        assert!(read_29_days_ago >= cutoff, "29-day-old read row is kept");

        let read_just_past_window = now - Duration::days(30) - Duration::seconds(1);
        assert!(read_just_past_window < cutoff, "30d+1s-old read row is purged");

        // Exactly at the cutoff is kept (strict comparison).
        assert!(cutoff >= cutoff);
    }
}
