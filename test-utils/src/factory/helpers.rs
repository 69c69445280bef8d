//! Shared helper utilities for factory methods.
//!
//! Provides the counter used for unique test values and convenience methods for
//! creating whole course trees in one call.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Entities created by `create_lesson_tree`.
pub struct LessonTree {
    /// Teacher (role 3) who authors the course.
    pub author: entity::user::Model,
    pub course: entity::course::Model,
    pub chapter: entity::chapter::Model,
    pub lesson: entity::lesson::Model,
}

/// Creates a teacher, an active course they author, one chapter and one lesson.
///
/// # Returns
/// - `Ok(LessonTree)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lesson_tree(db: &DatabaseConnection) -> Result<LessonTree, DbErr> {
    let author = crate::factory::user::create_user_with_role(db, 3).await?;
    let course = crate::factory::course::create_course(db, &author.id).await?;
    let chapter = crate::factory::chapter::create_chapter(db, &course.id).await?;
    let lesson = crate::factory::lesson::create_lesson(db, &chapter.id).await?;

    Ok(LessonTree {
        author,
        course,
        chapter,
        lesson,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_connected_tree() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_course_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let tree = create_lesson_tree(db).await?;

        assert_eq!(tree.author.role, 3);
        assert_eq!(tree.course.author_id, tree.author.id);
        assert_eq!(tree.chapter.course_id, tree.course.id);
        assert_eq!(tree.lesson.chapter_id, tree.chapter.id);

        Ok(())
    }
}
