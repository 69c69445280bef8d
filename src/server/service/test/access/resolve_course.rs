use super::*;

/// Tests every resource kind resolves to its course and author.
///
/// Expected: Ok(CourseOwner) with the tree's course and author
#[tokio::test]
async fn resolves_every_kind_to_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let lesson_test = factory::create_lesson_test(db, &tree.lesson.id).await?;
    let attachment = factory::create_attachment(db, &tree.lesson.id).await?;
    let comment = factory::create_comment(db, &tree.lesson.id, &tree.author.id).await?;

    let targets = vec![
        ContentRef::Course(tree.course.id.clone()),
        ContentRef::Chapter(tree.chapter.id.clone()),
        ContentRef::Lesson(tree.lesson.id.clone()),
        ContentRef::Test(lesson_test.id),
        ContentRef::Attachment(attachment.id),
        ContentRef::Comment(comment.id),
    ];

    let access = AccessService::new(db);
    for target in targets {
        let owner = access.resolve_course(&target).await?;

        assert_eq!(owner.course_id, tree.course.id, "{}", target);
        assert_eq!(owner.author_id, tree.author.id, "{}", target);
    }

    Ok(())
}

/// Tests each missing resource kind names itself in the error.
///
/// Expected: Err(NotFound("<Kind> not found!"))
#[tokio::test]
async fn missing_resource_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cases = vec![
        (ContentRef::Course("x".to_string()), "Course not found!"),
        (ContentRef::Chapter("x".to_string()), "Chapter not found!"),
        (ContentRef::Lesson("x".to_string()), "Lesson not found!"),
        (ContentRef::Test("x".to_string()), "Test not found!"),
        (ContentRef::Attachment("x".to_string()), "Attachment not found!"),
        (ContentRef::Comment("x".to_string()), "Comment not found!"),
    ];

    let access = AccessService::new(db);
    for (target, expected) in cases {
        match access.resolve_course(&target).await {
            Err(AppError::NotFound(message)) => assert_eq!(message, expected),
            other => panic!("Expected NotFound for {}, got: {:?}", target, other),
        }
    }

    Ok(())
}
