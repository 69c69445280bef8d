//! Lesson management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attachment::AttachmentRepository, comment::CommentRepository, lesson::LessonRepository,
        lesson_test::LessonTestRepository,
    },
    error::AppError,
    model::{
        attachment::Attachment,
        comment::Comment,
        lesson::{CreateLessonParams, Lesson, LessonDetail, UpdateLessonParams},
        lesson_test::LessonTest,
    },
};

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a lesson together with its tests, attachments and comments.
    pub async fn get_detail(&self, id: &str) -> Result<LessonDetail, AppError> {
        let Some(lesson) = LessonRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Lesson not found!".to_string()));
        };

        let tests = LessonTestRepository::new(self.db)
            .get_by_lesson(&lesson.id)
            .await?;
        let attachments = AttachmentRepository::new(self.db)
            .get_by_lesson(&lesson.id)
            .await?;
        let comments = CommentRepository::new(self.db)
            .get_by_lesson(&lesson.id)
            .await?;

        let tests: Result<Vec<_>, _> = tests.into_iter().map(LessonTest::from_entity).collect();
        let attachments: Result<Vec<_>, _> = attachments
            .into_iter()
            .map(Attachment::from_entity)
            .collect();

        Ok(LessonDetail {
            lesson: Lesson::from_entity(lesson)?,
            tests: tests?,
            attachments: attachments?,
            comments: comments.into_iter().map(Comment::from_entity).collect(),
        })
    }

    /// Creates a lesson, appending it to the chapter when no position is given.
    pub async fn create(&self, params: CreateLessonParams) -> Result<Lesson, AppError> {
        let repo = LessonRepository::new(self.db);

        let position = match params.position {
            Some(position) => position,
            None => repo
                .max_position(&params.chapter_id)
                .await?
                .unwrap_or(0)
                .checked_add(1)
                .ok_or_else(|| {
                    AppError::invalid_field("position", "Lesson position is out of range!")
                })?,
        };

        let lesson = repo
            .create(
                &params.chapter_id,
                position,
                params.title,
                params.description,
                params.url,
            )
            .await?;

        Lesson::from_entity(lesson)
    }

    pub async fn update(&self, id: &str, params: UpdateLessonParams) -> Result<Lesson, AppError> {
        let Some(lesson) = LessonRepository::new(self.db).update(id, params).await? else {
            return Err(AppError::NotFound("Lesson not found!".to_string()));
        };

        Lesson::from_entity(lesson)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if LessonRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound("Lesson not found!".to_string()));
        }

        Ok(())
    }
}
