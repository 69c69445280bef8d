use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(string(Chapter::Id).primary_key())
                    .col(string(Chapter::CourseId))
                    .col(integer(Chapter::Number))
                    .col(string(Chapter::Title))
                    .col(text_null(Chapter::Description))
                    .col(integer(Chapter::Status).default(1))
                    .col(timestamp_with_time_zone(Chapter::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_course_id")
                            .from(Chapter::Table, Chapter::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chapter_course_number")
                    .table(Chapter::Table)
                    .col(Chapter::CourseId)
                    .col(Chapter::Number)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chapter {
    Table,
    Id,
    CourseId,
    Number,
    Title,
    Description,
    Status,
    CreatedAt,
}
