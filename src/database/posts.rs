use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Post;

/// Repository for post rows
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new post. The author comes from the caller's decoded
    /// identity and the parent, when given, has already been verified to
    /// exist by the handler.
    pub async fn insert(
        &self,
        text_content: &str,
        author_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> Result<Post, DatabaseError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (text_content, author_id, parent_id)
            VALUES ($1, $2, $3)
            RETURNING id, text_content, author_id, parent_id, created_at, updated_at
            "#,
        )
        .bind(text_content)
        .bind(author_id)
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Post>, DatabaseError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, text_content, author_id, parent_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)"#)
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Overwrite `text_content` only. Returns the updated row, or None if
    /// the row vanished between the ownership check and the write.
    pub async fn update_text(
        &self,
        id: Uuid,
        text_content: &str,
    ) -> Result<Option<Post>, DatabaseError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET text_content = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, text_content, author_id, parent_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(text_content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Delete the row, returning the number of rows affected. Shares on the
    /// post cascade-delete and replies keep their rows with parent_id nulled;
    /// both are owned by the schema constraints.
    pub async fn delete(&self, id: Uuid) -> Result<u64, DatabaseError> {
        let result = sqlx::query(r#"DELETE FROM posts WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
