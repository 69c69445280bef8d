use super::*;

/// Tests the highest lesson position in a chapter.
///
/// Expected: None for an empty chapter, otherwise the maximum
#[tokio::test]
async fn finds_max_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let course = factory::create_course(db, &author.id).await?;
    let chapter = factory::create_chapter(db, &course.id).await?;

    let repo = LessonRepository::new(db);
    assert_eq!(repo.max_position(&chapter.id).await?, None);

    factory::lesson::LessonFactory::new(db, &chapter.id)
        .position(2)
        .build()
        .await?;
    factory::lesson::LessonFactory::new(db, &chapter.id)
        .position(7)
        .build()
        .await?;

    assert_eq!(repo.max_position(&chapter.id).await?, Some(7));

    Ok(())
}

/// Tests fetching lessons for several chapters at once.
///
/// Expected: Ok with lessons of both chapters only
#[tokio::test]
async fn gets_lessons_by_chapters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let second = factory::chapter::ChapterFactory::new(db, &tree.course.id)
        .number(2)
        .build()
        .await?;
    let third = factory::chapter::ChapterFactory::new(db, &tree.course.id)
        .number(3)
        .build()
        .await?;
    factory::create_lesson(db, &second.id).await?;
    factory::create_lesson(db, &third.id).await?;

    let repo = LessonRepository::new(db);
    let lessons = repo
        .get_by_chapters(vec![tree.chapter.id.clone(), second.id.clone()])
        .await?;

    assert_eq!(lessons.len(), 2);
    assert!(lessons.iter().all(|l| l.chapter_id != third.id));
    assert!(repo.get_by_chapters(Vec::new()).await?.is_empty());

    Ok(())
}
