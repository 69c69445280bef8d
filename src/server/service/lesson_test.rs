//! Lesson test (quiz) management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::lesson_test::LessonTestRepository,
    error::AppError,
    model::lesson_test::{CreateLessonTestParams, LessonTest, UpdateLessonTestParams},
};

pub struct LessonTestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonTestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<LessonTest, AppError> {
        let Some(test) = LessonTestRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Test not found!".to_string()));
        };

        LessonTest::from_entity(test)
    }

    pub async fn create(&self, params: CreateLessonTestParams) -> Result<LessonTest, AppError> {
        let test = LessonTestRepository::new(self.db).create(params).await?;

        LessonTest::from_entity(test)
    }

    pub async fn update(
        &self,
        id: &str,
        params: UpdateLessonTestParams,
    ) -> Result<LessonTest, AppError> {
        let Some(test) = LessonTestRepository::new(self.db).update(id, params).await? else {
            return Err(AppError::NotFound("Test not found!".to_string()));
        };

        LessonTest::from_entity(test)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if LessonTestRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound("Test not found!".to_string()));
        }

        Ok(())
    }
}
