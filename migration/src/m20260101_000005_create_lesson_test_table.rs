use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000004_create_lesson_table::Lesson;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonTest::Table)
                    .if_not_exists()
                    .col(string(LessonTest::Id).primary_key())
                    .col(string(LessonTest::LessonId))
                    .col(integer_null(LessonTest::Number))
                    .col(string(LessonTest::Title))
                    .col(text_null(LessonTest::Description))
                    .col(json(LessonTest::Questions))
                    .col(integer(LessonTest::Status).default(1))
                    .col(timestamp_with_time_zone(LessonTest::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_test_lesson_id")
                            .from(LessonTest::Table, LessonTest::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonTest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonTest {
    Table,
    Id,
    LessonId,
    Number,
    Title,
    Description,
    Questions,
    Status,
    CreatedAt,
}
