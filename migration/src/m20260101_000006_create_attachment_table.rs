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
                    .table(Attachment::Table)
                    .if_not_exists()
                    .col(string(Attachment::Id).primary_key())
                    .col(string(Attachment::LessonId))
                    .col(integer_null(Attachment::Number))
                    .col(string(Attachment::Title))
                    .col(text_null(Attachment::Description))
                    .col(string(Attachment::Url))
                    .col(integer(Attachment::Status).default(1))
                    .col(timestamp_with_time_zone(Attachment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attachment_lesson_id")
                            .from(Attachment::Table, Attachment::LessonId)
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
            .drop_table(Table::drop().table(Attachment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attachment {
    Table,
    Id,
    LessonId,
    Number,
    Title,
    Description,
    Url,
    Status,
    CreatedAt,
}
