use super::*;

/// Tests an enrolled learner may read a course they did not write.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_enrolled_learner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let learner = factory::create_user(db).await?;
    let course = factory::create_course(db, &author.id).await?;
    factory::create_enrollment(db, &learner.id, &course.id).await?;

    let result = AccessService::new(db)
        .can_read(&learner.id, &course.id, &author.id)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a learner with no enrollment is denied.
///
/// Expected: Err(AccessDenied) with the fixed permission message
#[tokio::test]
async fn denies_stranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let stranger = factory::create_user(db).await?;
    let course = factory::create_course(db, &author.id).await?;

    let result = AccessService::new(db)
        .can_read(&stranger.id, &course.id, &author.id)
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied {
            user_id, message, ..
        })) => {
            assert_eq!(user_id, stranger.id);
            assert_eq!(message, PERMISSION_DENIED);
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests an admin reads any course without enrollment.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_admin_and_root() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let admin = factory::user::create_user_with_role(db, Role::Admin.id()).await?;
    let root = factory::user::create_user_with_role(db, Role::Root.id()).await?;
    let course = factory::create_course(db, &author.id).await?;

    let access = AccessService::new(db);

    assert!(access.can_read(&admin.id, &course.id, &author.id).await.is_ok());
    assert!(access.can_read(&root.id, &course.id, &author.id).await.is_ok());

    Ok(())
}

/// Tests the author id comparison ignores UUID casing and whitespace.
///
/// Expected: Ok(()) when the author id is given uppercased and padded
#[tokio::test]
async fn allows_author_with_unnormalized_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let course = factory::create_course(db, &author.id).await?;

    let padded = format!("  {}  ", author.id.to_uppercase());
    let result = AccessService::new(db)
        .can_read(&author.id, &course.id, &padded)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an unknown principal is reported as missing, never denied.
///
/// Expected: Err(NotFound("User not found!"))
#[tokio::test]
async fn unknown_principal_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let course = factory::create_course(db, &author.id).await?;

    let result = AccessService::new(db)
        .can_read("ghost", &course.id, &author.id)
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "User not found!"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    Ok(())
}

/// Tests read is allowed exactly when at least one fact holds.
///
/// Runs every combination of {enrolled, staff role, author}.
///
/// Expected: Ok for 7 combinations, AccessDenied only when all are false
#[tokio::test]
async fn allows_iff_any_fact_holds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let access = AccessService::new(db);
    let other_author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;

    for mask in 0..8u8 {
        let enrolled = mask & 1 != 0;
        let staff = mask & 2 != 0;
        let author = mask & 4 != 0;

        let role = if staff { Role::Admin } else { Role::Learner };
        let principal = factory::user::create_user_with_role(db, role.id()).await?;

        let author_id = if author {
            principal.id.clone()
        } else {
            other_author.id.clone()
        };
        let course = factory::create_course(db, &author_id).await?;

        if enrolled {
            factory::create_enrollment(db, &principal.id, &course.id).await?;
        }

        let result = access.can_read(&principal.id, &course.id, &author_id).await;

        if enrolled || staff || author {
            assert!(result.is_ok(), "combination {:03b} should allow", mask);
        } else {
            assert!(
                result.as_ref().is_err_and(is_denied),
                "combination {:03b} should deny",
                mask
            );
        }
    }

    Ok(())
}

/// Tests repeated checks on unchanged data agree.
///
/// Expected: same decision on every call
#[tokio::test]
async fn decision_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let stranger = factory::create_user(db).await?;
    let course = factory::create_course(db, &author.id).await?;

    let access = AccessService::new(db);

    for _ in 0..3 {
        let result = access.can_read(&stranger.id, &course.id, &author.id).await;
        assert!(result.as_ref().is_err_and(is_denied));
    }

    factory::create_enrollment(db, &stranger.id, &course.id).await?;

    for _ in 0..3 {
        assert!(access
            .can_read(&stranger.id, &course.id, &author.id)
            .await
            .is_ok());
    }

    Ok(())
}
