pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_course_table;
mod m20260101_000003_create_chapter_table;
mod m20260101_000004_create_lesson_table;
mod m20260101_000005_create_lesson_test_table;
mod m20260101_000006_create_attachment_table;
mod m20260101_000007_create_comment_table;
mod m20260101_000008_create_enrollment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_course_table::Migration),
            Box::new(m20260101_000003_create_chapter_table::Migration),
            Box::new(m20260101_000004_create_lesson_table::Migration),
            Box::new(m20260101_000005_create_lesson_test_table::Migration),
            Box::new(m20260101_000006_create_attachment_table::Migration),
            Box::new(m20260101_000007_create_comment_table::Migration),
            Box::new(m20260101_000008_create_enrollment_table::Migration),
        ]
    }
}
