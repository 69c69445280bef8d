//! Chapter domain models and parameters.

use crate::{
    model::chapter::{ChapterDto, ChapterWithLessonsDto},
    server::{
        error::AppError,
        model::{lesson::Lesson, role::ContentStatus},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: String,
    pub course_id: String,
    pub number: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: ContentStatus,
}

impl Chapter {
    pub fn from_entity(entity: entity::chapter::Model) -> Result<Self, AppError> {
        Ok(Self {
            status: ContentStatus::try_from(entity.status)?,
            id: entity.id,
            course_id: entity.course_id,
            number: entity.number,
            title: entity.title,
            description: entity.description,
        })
    }

    pub fn into_dto(self) -> ChapterDto {
        ChapterDto {
            id: self.id,
            course_id: self.course_id,
            number: self.number,
            title: self.title,
            description: self.description,
            status: self.status.name().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChapterWithLessons {
    pub chapter: Chapter,
    pub lessons: Vec<Lesson>,
}

impl ChapterWithLessons {
    pub fn into_dto(self) -> ChapterWithLessonsDto {
        ChapterWithLessonsDto {
            chapter: self.chapter.into_dto(),
            lessons: self.lessons.into_iter().map(Lesson::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateChapterParams {
    pub course_id: String,
    /// `None` appends after the last chapter.
    pub number: Option<i32>,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateChapterParams {
    pub number: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ContentStatus>,
}
