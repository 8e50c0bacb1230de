//! Team read-model repository.
//!
//! Teams are written by the platform's CRUD layer; this repository only
//! reads the columns the distribution engine needs.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crewdesk_core::error::{AppError, ErrorKind};
use crewdesk_core::result::AppResult;
use crewdesk_entity::team::model::Team;

/// Read-only repository over the platform's `teams` table.
#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Create a new team repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a team by id.
    pub async fn find_by_id(&self, team_id: i64) -> AppResult<Option<Team>> {
        sqlx::query_as::<_, Team>(
            "SELECT id, name, description, deadline FROM teams WHERE id = $1",
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find team", e))
    }

    /// Find teams whose deadline falls within `[start, end]`.
    ///
    /// Used by the approaching-deadline sweep.
    pub async fn find_deadline_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Team>> {
        sqlx::query_as::<_, Team>(
            "SELECT id, name, description, deadline FROM teams \
             WHERE deadline IS NOT NULL AND deadline >= $1 AND deadline <= $2",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find approaching deadlines", e)
        })
    }

    /// Find teams whose deadline is strictly before `now`.
    ///
    /// Used by the reached-deadline sweep.
    pub async fn find_deadline_before(&self, now: DateTime<Utc>) -> AppResult<Vec<Team>> {
        sqlx::query_as::<_, Team>(
            "SELECT id, name, description, deadline FROM teams \
             WHERE deadline IS NOT NULL AND deadline < $1",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find passed deadlines", e)
        })
    }
}
