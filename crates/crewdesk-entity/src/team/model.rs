//! Team read model.
//!
//! Teams are owned by the platform's CRUD layer; this engine only reads
//! them to resolve recipients and interpolate messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team as read from the platform's store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    /// Unique team identifier.
    pub id: i64,
    /// Team display name.
    pub name: String,
    /// Team description, if set.
    pub description: Option<String>,
    /// Team deadline, if set.
    pub deadline: Option<DateTime<Utc>>,
}
