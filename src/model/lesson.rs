use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    attachment::AttachmentDto, comment::CommentDto, lesson_test::LessonTestDto,
};

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LessonDto {
    pub id: String,
    pub chapter_id: String,
    pub position: i32,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub status: String,
}

/// Lesson with everything attached to it.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LessonDetailDto {
    pub lesson: LessonDto,
    pub tests: Vec<LessonTestDto>,
    pub attachments: Vec<AttachmentDto>,
    pub comments: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateLessonDto {
    pub chapter_id: String,
    /// Defaults to the end of the chapter.
    #[serde(default)]
    pub position: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdateLessonDto {
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
