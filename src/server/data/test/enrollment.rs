use super::*;

/// Tests enrollment existence is per user and course.
///
/// Expected: true only for the enrolled pair
#[tokio::test]
async fn checks_enrollment_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let learner = factory::create_user(db).await?;
    let course = factory::create_course(db, &author.id).await?;
    let other_course = factory::create_course(db, &author.id).await?;

    let repo = EnrollmentRepository::new(db);
    repo.create(&learner.id, &course.id, 1000).await?;

    assert!(repo.exists(&learner.id, &course.id).await?);
    assert!(repo.exists(&learner.id.to_uppercase(), &course.id).await?);
    assert!(!repo.exists(&learner.id, &other_course.id).await?);
    assert!(!repo.exists(&author.id, &course.id).await?);

    Ok(())
}

/// Tests enrollment counts per course and per user.
///
/// Expected: Ok with matching counts
#[tokio::test]
async fn counts_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let course = factory::create_course(db, &author.id).await?;
    let other_course = factory::create_course(db, &author.id).await?;

    factory::create_enrollment(db, &first.id, &course.id).await?;
    factory::create_enrollment(db, &second.id, &course.id).await?;
    factory::create_enrollment(db, &first.id, &other_course.id).await?;

    let repo = EnrollmentRepository::new(db);

    assert_eq!(repo.count().await?, 3);
    assert_eq!(repo.count_by_course(&course.id).await?, 2);
    assert_eq!(repo.count_by_user(&first.id).await?, 2);
    assert_eq!(repo.get_by_user(&second.id).await?.len(), 1);

    Ok(())
}

/// Tests a second row for the same learner and course hits the unique index.
///
/// Expected: Err(DbErr) recognized as a unique violation
#[tokio::test]
async fn duplicate_enrollment_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        "CREATE UNIQUE INDEX idx_enrollment_user_course ON enrollment (user_id, course_id)",
    )
    .await?;

    let author = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let learner = factory::create_user(db).await?;
    let course = factory::create_course(db, &author.id).await?;

    let repo = EnrollmentRepository::new(db);
    repo.create(&learner.id, &course.id, 0).await?;

    match repo.create(&learner.id, &course.id, 0).await {
        Err(err) => assert!(is_unique_violation(&err)),
        Ok(_) => panic!("Expected unique violation"),
    }

    Ok(())
}
