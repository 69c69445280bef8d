use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lesson::LessonDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChapterDto {
    pub id: String,
    pub course_id: String,
    pub number: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ChapterWithLessonsDto {
    pub chapter: ChapterDto,
    pub lessons: Vec<LessonDto>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateChapterDto {
    pub course_id: String,
    /// Defaults to the next free number in the course.
    #[serde(default)]
    pub number: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdateChapterDto {
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
