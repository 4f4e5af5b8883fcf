use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// "User shared post" join row, unique per (post_id, user_id) pair
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Share {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
