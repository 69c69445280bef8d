use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: String,
    pub lesson_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub lesson_id: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdateCommentDto {
    pub content: String,
}
