use super::*;

/// Tests the author may write under their course.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let course = factory::create_course(db, &author.id).await?;

    let result = AccessService::new(db).can_write(&course.id, &author.id).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests enrollment grants read but never write.
///
/// Expected: can_read Ok, can_write Err(AccessDenied)
#[tokio::test]
async fn denies_enrolled_learner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let learner = factory::create_user(db).await?;
    let course = factory::create_course(db, &author.id).await?;
    factory::create_enrollment(db, &learner.id, &course.id).await?;

    let access = AccessService::new(db);

    assert!(access
        .can_read(&learner.id, &course.id, &author.id)
        .await
        .is_ok());

    let result = access.can_write(&course.id, &learner.id).await;
    assert!(result.as_ref().is_err_and(is_denied));

    Ok(())
}

/// Tests another teacher cannot write under a course they did not author.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_other_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let other = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let course = factory::create_course(db, &author.id).await?;

    let result = AccessService::new(db).can_write(&course.id, &other.id).await;

    assert!(result.as_ref().is_err_and(is_denied));

    Ok(())
}

/// Tests an admin without any relation to the course may read and write it.
///
/// Expected: Ok(()) for both checks
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let admin = factory::user::create_user_with_role(db, Role::Admin.id()).await?;
    let course = factory::create_course(db, &author.id).await?;

    let access = AccessService::new(db);

    assert!(access.can_read(&admin.id, &course.id, &author.id).await.is_ok());
    assert!(access.can_write(&course.id, &admin.id).await.is_ok());

    Ok(())
}

/// Tests a missing principal is reported before a missing course.
///
/// Expected: Err(NotFound("User not found!")) even when the course is also missing
#[tokio::test]
async fn unknown_principal_reported_before_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AccessService::new(db).can_write("no-course", "ghost").await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "User not found!"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    Ok(())
}

/// Tests a missing course with an existing principal.
///
/// Expected: Err(NotFound("Course not found!"))
#[tokio::test]
async fn unknown_course_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, Role::Admin.id()).await?;

    let result = AccessService::new(db).can_write("no-course", &admin.id).await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Course not found!"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    Ok(())
}
