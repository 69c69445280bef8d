//! Lesson test data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        lesson_test::{CreateLessonTestParams, Question, UpdateLessonTestParams},
        role::ContentStatus,
    },
    util::id::{new_id, normalize_id},
};

/// Repository providing database operations for lesson tests.
pub struct LessonTestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonTestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an active test with its questions serialized to JSON.
    pub async fn create(
        &self,
        params: CreateLessonTestParams,
    ) -> Result<entity::lesson_test::Model, DbErr> {
        entity::lesson_test::ActiveModel {
            id: ActiveValue::Set(new_id()),
            lesson_id: ActiveValue::Set(normalize_id(&params.lesson_id)),
            number: ActiveValue::Set(params.number),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            questions: ActiveValue::Set(questions_to_json(&params.questions)?),
            status: ActiveValue::Set(ContentStatus::Active.id()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::lesson_test::Model>, DbErr> {
        entity::prelude::LessonTest::find_by_id(normalize_id(id))
            .one(self.db)
            .await
    }

    pub async fn get_by_lesson(
        &self,
        lesson_id: &str,
    ) -> Result<Vec<entity::lesson_test::Model>, DbErr> {
        entity::prelude::LessonTest::find()
            .filter(entity::lesson_test::Column::LessonId.eq(normalize_id(lesson_id)))
            .order_by_asc(entity::lesson_test::Column::Number)
            .order_by_asc(entity::lesson_test::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        params: UpdateLessonTestParams,
    ) -> Result<Option<entity::lesson_test::Model>, DbErr> {
        let Some(test) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::lesson_test::ActiveModel = test.clone().into();
        if let Some(number) = params.number {
            active.number = ActiveValue::Set(Some(number));
        }
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(questions) = params.questions {
            active.questions = ActiveValue::Set(questions_to_json(&questions)?);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.id());
        }

        if !active.is_changed() {
            return Ok(Some(test));
        }

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::LessonTest::delete_by_id(normalize_id(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn questions_to_json(questions: &[Question]) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(questions).map_err(|e| DbErr::Json(e.to_string()))
}
