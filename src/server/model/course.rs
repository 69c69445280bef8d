//! Course domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::course::{
        ChapterOutlineDto, CourseContentDto, CourseDto, CourseSummaryDto, PaginatedCoursesDto,
    },
    server::{
        error::AppError,
        model::{chapter::Chapter, lesson::Lesson, role::ContentStatus},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Result<Self, AppError> {
        Ok(Self {
            status: ContentStatus::try_from(entity.status)?,
            id: entity.id,
            author_id: entity.author_id,
            title: entity.title,
            description: entity.description,
            price: entity.price,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            description: self.description,
            price: self.price,
            status: self.status.name().to_string(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub author_id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub status: ContentStatus,
}

/// Partial course update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub status: Option<ContentStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCourses {
    pub courses: Vec<Course>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCourses {
    pub fn into_dto(self) -> PaginatedCoursesDto {
        PaginatedCoursesDto {
            courses: self.courses.into_iter().map(Course::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Public overview of a course.
#[derive(Debug, Clone)]
pub struct CourseSummary {
    pub course: Course,
    pub author_name: String,
    pub chapter_count: u64,
    pub learner_count: u64,
}

impl CourseSummary {
    pub fn into_dto(self) -> CourseSummaryDto {
        CourseSummaryDto {
            course: self.course.into_dto(),
            author_name: self.author_name,
            chapter_count: self.chapter_count,
            learner_count: self.learner_count,
        }
    }
}

/// Course with its chapters, each with its lessons, ordered by number and position.
#[derive(Debug, Clone)]
pub struct CourseContent {
    pub course: Course,
    pub chapters: Vec<(Chapter, Vec<Lesson>)>,
}

impl CourseContent {
    pub fn into_dto(self) -> CourseContentDto {
        CourseContentDto {
            course: self.course.into_dto(),
            chapters: self
                .chapters
                .into_iter()
                .map(|(chapter, lessons)| ChapterOutlineDto {
                    chapter: chapter.into_dto(),
                    lessons: lessons.into_iter().map(Lesson::into_dto).collect(),
                })
                .collect(),
        }
    }
}

/// Computes the page count for a paginated listing.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
