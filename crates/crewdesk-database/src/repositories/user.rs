//! Team-membership repository over the platform's `users` table.

use sqlx::PgPool;

use crewdesk_core::error::{AppError, ErrorKind};
use crewdesk_core::result::AppResult;

/// Read-only repository over the platform's `users` table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the ids of a team's current members.
    pub async fn find_ids_by_team(&self, team_id: i64) -> AppResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE team_id = $1")
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list team members", e)
            })
    }
}
