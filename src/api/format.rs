use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::Post;

/// Public wire shape of a post, derived one-to-one from a stored row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: Uuid,
    pub text_content: String,
    pub author: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert a stored post into its external representation
pub fn post_to_api(post: &Post) -> PostDto {
    PostDto {
        id: post.id,
        text_content: post.text_content.clone(),
        author: post.author_id,
        parent: post.parent_id,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}
