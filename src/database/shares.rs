use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// Repository for the (post_id, user_id) share relation
#[derive(Clone)]
pub struct ShareRepository {
    pool: PgPool,
}

impl ShareRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record that a user shared a post. Idempotent: repeating the share
    /// leaves the single existing row in place. Returns true if a row was
    /// newly inserted.
    pub async fn insert(&self, post_id: Uuid, user_id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO shares (post_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove the caller's share of a post, returning the number of rows
    /// affected (zero when the post was never shared by this user).
    pub async fn delete(&self, post_id: Uuid, user_id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query(r#"DELETE FROM shares WHERE post_id = $1 AND user_id = $2"#)
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
