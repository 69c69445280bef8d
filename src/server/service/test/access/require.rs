use super::*;

/// Tests an enrolled learner reads a lesson but cannot write under it.
///
/// Expected: require_read Ok, require_write Err(AccessDenied)
#[tokio::test]
async fn enrolled_learner_reads_but_cannot_write_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, &learner.id, &tree.course.id).await?;

    let access = AccessService::new(db);
    let target = ContentRef::Lesson(tree.lesson.id.clone());

    let owner = access.require_read(&learner.id, &target).await?;
    assert_eq!(owner.course_id, tree.course.id);

    let result = access.require_write(&learner.id, &target).await;
    assert!(result.as_ref().is_err_and(is_denied));

    Ok(())
}

/// Tests the author and an admin may write under an attachment.
///
/// Expected: Ok(CourseOwner) for both
#[tokio::test]
async fn author_and_admin_write_attachment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let admin = factory::user::create_user_with_role(db, Role::Admin.id()).await?;
    let attachment = factory::create_attachment(db, &tree.lesson.id).await?;

    let access = AccessService::new(db);
    let target = ContentRef::Attachment(attachment.id);

    assert!(access.require_write(&tree.author.id, &target).await.is_ok());
    assert!(access.require_write(&admin.id, &target).await.is_ok());

    Ok(())
}

/// Tests comments follow the same write policy as other content.
///
/// The learner who wrote a comment is enrolled but not the author, so the
/// canonical policy denies the write.
///
/// Expected: Err(AccessDenied) for the commenter, Ok for the course author
#[tokio::test]
async fn comment_write_uses_course_policy() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, &learner.id, &tree.course.id).await?;
    let comment = factory::create_comment(db, &tree.lesson.id, &learner.id).await?;

    let access = AccessService::new(db);
    let target = ContentRef::Comment(comment.id);

    assert!(access.require_read(&learner.id, &target).await.is_ok());
    assert!(access
        .require_write(&learner.id, &target)
        .await
        .as_ref()
        .is_err_and(is_denied));
    assert!(access.require_write(&tree.author.id, &target).await.is_ok());

    Ok(())
}

/// Tests a missing target is reported before the principal is looked at.
///
/// Expected: Err(NotFound("Chapter not found!"))
#[tokio::test]
async fn missing_target_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AccessService::new(db)
        .require_read("ghost", &ContentRef::Chapter("missing".to_string()))
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Chapter not found!"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    Ok(())
}
