//! Notification repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crewdesk_core::error::{AppError, ErrorKind};
use crewdesk_core::result::AppResult;
use crewdesk_entity::notification::model::Notification;
use crewdesk_entity::notification::priority::NotificationPriority;
use crewdesk_entity::notification::request::NotificationRequest;

/// Repository for notification CRUD operations.
///
/// Reads never filter on `expires_at`; expired notifications stay visible
/// until the retention sweep removes them.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a notification from a validated request.
    ///
    /// The database assigns the id and creation timestamp; the stored row
    /// is returned.
    pub async fn create(&self, request: &NotificationRequest) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, type_tag, message, team_id, course_id, priority, link, metadata, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(request.user_id)
        .bind(&request.type_tag)
        .bind(&request.message)
        .bind(request.team_id)
        .bind(request.course_id)
        .bind(request.priority.unwrap_or(NotificationPriority::Normal))
        .bind(&request.link)
        .bind(&request.metadata)
        .bind(request.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// Find a notification by id.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    /// List all notifications for a user, newest first.
    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// List unread notifications for a user, newest first.
    pub async fn find_unread(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 AND is_read = FALSE \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unread notifications", e)
        })
    }

    /// List notifications created after `since` for a user, newest first.
    pub async fn find_recent(
        &self,
        user_id: i64,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 AND created_at > $2 \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent notifications", e)
        })
    }

    /// List notifications for a team, newest first.
    pub async fn find_by_team(&self, team_id: i64) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE team_id = $1 ORDER BY created_at DESC",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list team notifications", e)
        })
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: i64) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark a notification as read.
    ///
    /// Idempotent: only unread rows transition, so `read_at` is set at
    /// most once. Re-marking an already-read notification returns the
    /// existing row unchanged. Fails with NotFound for a missing id.
    pub async fn mark_read(&self, id: i64) -> AppResult<Notification> {
        let updated = sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET is_read = TRUE, read_at = NOW() \
             WHERE id = $1 AND is_read = FALSE RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;

        match updated {
            Some(notification) => Ok(notification),
            None => self
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Notification {id} not found"))),
        }
    }

    /// Mark all unread notifications for a user as read.
    ///
    /// Returns the number of notifications transitioned (0 if none).
    pub async fn mark_all_read(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE, read_at = NOW() \
             WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }

    /// Delete a single notification.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Purge read notifications whose `read_at` is before `cutoff`.
    ///
    /// Run only by the retention sweep; not exposed to interactive callers.
    pub async fn delete_old_read(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM notifications WHERE is_read = TRUE AND read_at < $1")
                .bind(cutoff)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to purge notifications", e)
                })?;
        Ok(result.rows_affected())
    }
}
