use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AttachmentDto {
    pub id: String,
    pub lesson_id: String,
    pub number: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateAttachmentDto {
    pub lesson_id: String,
    #[serde(default)]
    pub number: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdateAttachmentDto {
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
