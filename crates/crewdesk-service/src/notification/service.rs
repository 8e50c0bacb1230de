//! Notification service.
//!
//! The single write path for notification records. Every mutation that
//! changes a user's unread count also pushes a fresh count snapshot on
//! that user's live stream, so connected badge counters never go stale.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};

use crewdesk_core::config::notifications::NotificationsConfig;
use crewdesk_core::error::AppError;
use crewdesk_core::result::AppResult;
use crewdesk_database::repositories::notification::NotificationRepository;
use crewdesk_entity::notification::model::Notification;
use crewdesk_entity::notification::request::NotificationRequest;
use crewdesk_realtime::publisher::RealtimePublisher;

use crate::strategy::registry::StrategyRegistry;

/// Creates, queries, and mutates notification records.
pub struct NotificationService {
    repository: NotificationRepository,
    registry: Arc<StrategyRegistry>,
    realtime: Arc<RealtimePublisher>,
    config: NotificationsConfig,
}

impl NotificationService {
    /// Create a new notification service.
    pub fn new(
        repository: NotificationRepository,
        registry: Arc<StrategyRegistry>,
        realtime: Arc<RealtimePublisher>,
        config: NotificationsConfig,
    ) -> Self {
        Self {
            repository,
            registry,
            realtime,
            config,
        }
    }

    /// Create a notification.
    ///
    /// The request is validated and enriched by its type's strategy,
    /// persisted, then pushed on the owner's notification and unread-count
    /// streams. The stored record is returned.
    pub async fn create_notification(
        &self,
        request: NotificationRequest,
    ) -> AppResult<Notification> {
        let request = self.registry.process_notification(request)?;
        let notification = self.repository.create(&request).await?;

        info!(
            notification_id = notification.id,
            user_id = notification.user_id,
            type_tag = %notification.type_tag,
            priority = %notification.priority,
            "Created notification"
        );

        self.realtime.push_notification(&notification);
        self.push_unread_count(notification.user_id).await;

        Ok(notification)
    }

    /// Fetch a single notification, enforcing ownership.
    pub async fn get_notification(&self, id: i64, user_id: i64) -> AppResult<Notification> {
        let notification = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))?;

        if notification.user_id != user_id {
            return Err(AppError::authorization(
                "Notification belongs to another user",
            ));
        }

        Ok(notification)
    }

    /// Mark a notification as read on behalf of its owner.
    ///
    /// Idempotent on re-marking. Fails with NotFound for a missing id and
    /// with an authorization error when the caller does not own the
    /// notification.
    pub async fn mark_read(&self, id: i64, user_id: i64) -> AppResult<Notification> {
        // Ownership check first, so a foreign id never transitions.
        self.get_notification(id, user_id).await?;

        let notification = self.repository.mark_read(id).await?;
        debug!(notification_id = id, user_id, "Marked notification read");

        self.push_unread_count(user_id).await;
        Ok(notification)
    }

    /// Mark all of a user's unread notifications as read.
    ///
    /// Returns the number of notifications transitioned.
    pub async fn mark_all_read(&self, user_id: i64) -> AppResult<u64> {
        let updated = self.repository.mark_all_read(user_id).await?;
        if updated > 0 {
            info!(user_id, updated, "Marked all notifications read");
        }

        self.push_unread_count(user_id).await;
        Ok(updated)
    }

    /// Delete a notification on behalf of its owner.
    pub async fn delete_notification(&self, id: i64, user_id: i64) -> AppResult<()> {
        let notification = self.get_notification(id, user_id).await?;

        self.repository.delete(id).await?;
        debug!(notification_id = id, user_id, "Deleted notification");

        if notification.is_unread() {
            self.push_unread_count(user_id).await;
        }

        Ok(())
    }

    /// List all notifications for a user, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        self.repository.find_by_user(user_id).await
    }

    /// List unread notifications for a user, newest first.
    pub async fn list_unread(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        self.repository.find_unread(user_id).await
    }

    /// List notifications created within the configured recent window.
    pub async fn list_recent(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        let since = Utc::now() - Duration::hours(self.config.recent_window_hours);
        self.repository.find_recent(user_id, since).await
    }

    /// List notifications attached to a team, newest first.
    pub async fn list_for_team(&self, team_id: i64) -> AppResult<Vec<Notification>> {
        self.repository.find_by_team(team_id).await
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: i64) -> AppResult<i64> {
        self.repository.count_unread(user_id).await
    }

    /// Push a fresh unread-count snapshot for a user.
    ///
    /// Best-effort: a count query failure is logged and swallowed so the
    /// mutation that triggered the push still succeeds.
    async fn push_unread_count(&self, user_id: i64) {
        match self.repository.count_unread(user_id).await {
            Ok(count) => self.realtime.push_unread_count(user_id, count),
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Failed to refresh unread count");
            }
        }
    }
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("registry", &self.registry)
            .finish()
    }
}
