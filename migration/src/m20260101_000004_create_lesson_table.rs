use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_chapter_table::Chapter;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(string(Lesson::Id).primary_key())
                    .col(string(Lesson::ChapterId))
                    .col(integer(Lesson::Position))
                    .col(string(Lesson::Title))
                    .col(text_null(Lesson::Description))
                    .col(string(Lesson::Url))
                    .col(integer(Lesson::Status).default(1))
                    .col(timestamp_with_time_zone(Lesson::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_chapter_id")
                            .from(Lesson::Table, Lesson::ChapterId)
                            .to(Chapter::Table, Chapter::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    Table,
    Id,
    ChapterId,
    Position,
    Title,
    Description,
    Url,
    Status,
    CreatedAt,
}
