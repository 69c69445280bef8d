//! Lesson domain models and parameters.

use crate::{
    model::lesson::{LessonDetailDto, LessonDto},
    server::{
        error::AppError,
        model::{
            attachment::Attachment, comment::Comment, lesson_test::LessonTest,
            role::ContentStatus,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: String,
    pub chapter_id: String,
    pub position: i32,
    pub title: String,
    pub description: Option<String>,
    /// Video location.
    pub url: String,
    pub status: ContentStatus,
}

impl Lesson {
    pub fn from_entity(entity: entity::lesson::Model) -> Result<Self, AppError> {
        Ok(Self {
            status: ContentStatus::try_from(entity.status)?,
            id: entity.id,
            chapter_id: entity.chapter_id,
            position: entity.position,
            title: entity.title,
            description: entity.description,
            url: entity.url,
        })
    }

    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            chapter_id: self.chapter_id,
            position: self.position,
            title: self.title,
            description: self.description,
            url: self.url,
            status: self.status.name().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LessonDetail {
    pub lesson: Lesson,
    pub tests: Vec<LessonTest>,
    pub attachments: Vec<Attachment>,
    pub comments: Vec<Comment>,
}

impl LessonDetail {
    pub fn into_dto(self) -> LessonDetailDto {
        LessonDetailDto {
            lesson: self.lesson.into_dto(),
            tests: self.tests.into_iter().map(LessonTest::into_dto).collect(),
            attachments: self
                .attachments
                .into_iter()
                .map(Attachment::into_dto)
                .collect(),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLessonParams {
    pub chapter_id: String,
    /// `None` appends after the last lesson of the chapter.
    pub position: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLessonParams {
    pub position: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub status: Option<ContentStatus>,
}
