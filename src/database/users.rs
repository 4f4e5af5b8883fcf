use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::User;

/// Repository for user rows. Only registration and login touch this; the
/// post handlers consume nothing but the id from the decoded token.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, handle: &str, password_hash: &str) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (handle, password_hash)
            VALUES ($1, $2)
            RETURNING id, handle, password_hash, created_at
            "#,
        )
        .bind(handle)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn fetch_by_handle(&self, handle: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, handle, password_hash, created_at
            FROM users
            WHERE handle = $1
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
