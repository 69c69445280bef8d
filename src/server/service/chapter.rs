//! Chapter management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{chapter::ChapterRepository, lesson::LessonRepository},
    error::AppError,
    model::{
        chapter::{Chapter, ChapterWithLessons, CreateChapterParams, UpdateChapterParams},
        lesson::Lesson,
    },
};

pub struct ChapterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChapterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a chapter with its lessons ordered by position.
    pub async fn get_with_lessons(&self, id: &str) -> Result<ChapterWithLessons, AppError> {
        let Some(chapter) = ChapterRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Chapter not found!".to_string()));
        };

        let lessons = LessonRepository::new(self.db)
            .get_by_chapter(&chapter.id)
            .await?;
        let lessons: Result<Vec<_>, _> = lessons.into_iter().map(Lesson::from_entity).collect();

        Ok(ChapterWithLessons {
            chapter: Chapter::from_entity(chapter)?,
            lessons: lessons?,
        })
    }

    /// Creates a chapter, numbering it after the highest existing chapter when no number is given.
    ///
    /// # Returns
    /// - `Ok(Chapter)` - The created chapter
    /// - `Err(AppError::Validation)` - The number is already used in the course
    pub async fn create(&self, params: CreateChapterParams) -> Result<Chapter, AppError> {
        let repo = ChapterRepository::new(self.db);

        let number = match params.number {
            Some(number) => number,
            None => repo
                .max_number(&params.course_id)
                .await?
                .unwrap_or(0)
                .checked_add(1)
                .ok_or_else(|| {
                    AppError::invalid_field("number", "Chapter number is out of range!")
                })?,
        };

        if repo.number_taken(&params.course_id, number, None).await? {
            return Err(duplicate_number(number));
        }

        let chapter = repo
            .create(&params.course_id, number, params.title, params.description)
            .await?;

        Chapter::from_entity(chapter)
    }

    /// Applies a partial update, keeping chapter numbers unique within the course.
    pub async fn update(&self, id: &str, params: UpdateChapterParams) -> Result<Chapter, AppError> {
        let repo = ChapterRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Chapter not found!".to_string()));
        };

        if let Some(number) = params.number {
            if repo
                .number_taken(&existing.course_id, number, Some(&existing.id))
                .await?
            {
                return Err(duplicate_number(number));
            }
        }

        let Some(chapter) = repo.update(&existing.id, params).await? else {
            return Err(AppError::NotFound("Chapter not found!".to_string()));
        };

        Chapter::from_entity(chapter)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if ChapterRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound("Chapter not found!".to_string()));
        }

        Ok(())
    }
}

fn duplicate_number(number: i32) -> AppError {
    AppError::invalid_field(
        "number",
        format!("Chapter number {} already exists in this course!", number),
    )
}
