use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{chapter::ChapterDto, lesson::LessonDto};

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CourseDto {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    /// Content status name: `INACTIVE`, `ACTIVE`, `PENDING` or `DRAFT`.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedCoursesDto {
    pub courses: Vec<CourseDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Public overview of a course, visible without enrollment.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CourseSummaryDto {
    pub course: CourseDto,
    pub author_name: String,
    pub chapter_count: u64,
    pub learner_count: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ChapterOutlineDto {
    pub chapter: ChapterDto,
    pub lessons: Vec<LessonDto>,
}

/// Complete course tree, readable by enrolled learners, the author and staff.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CourseContentDto {
    pub course: CourseDto,
    pub chapters: Vec<ChapterOutlineDto>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateCourseDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: i64,
    /// Defaults to `DRAFT`.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdateCourseDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct EnrollmentDto {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}
