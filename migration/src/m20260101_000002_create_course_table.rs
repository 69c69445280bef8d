use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(string(Course::Id).primary_key())
                    .col(string(Course::AuthorId))
                    .col(string(Course::Title))
                    .col(text_null(Course::Description))
                    .col(big_integer(Course::Price).default(0))
                    .col(integer(Course::Status).default(20))
                    .col(timestamp_with_time_zone(Course::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_author_id")
                            .from(Course::Table, Course::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    AuthorId,
    Title,
    Description,
    Price,
    Status,
    CreatedAt,
}
