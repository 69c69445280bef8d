use super::*;
use crate::server::service::report::ReportService;

/// Tests dashboard totals and rankings.
///
/// Expected: counts per role, revenue summed from enrollments, most joined course first
#[tokio::test]
async fn builds_dashboard() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, Role::Admin.id()).await?;
    let popular_teacher = factory::user::UserFactory::new(db)
        .role(Role::Teacher.id())
        .name("Grace", "Hopper")
        .build()
        .await?;
    let quiet_teacher = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let popular = factory::create_course(db, &popular_teacher.id).await?;
    let quiet = factory::create_course(db, &quiet_teacher.id).await?;

    factory::enrollment::create_enrollment_with_price(db, &first.id, &popular.id, 1000).await?;
    factory::enrollment::create_enrollment_with_price(db, &second.id, &popular.id, 1500).await?;
    factory::enrollment::create_enrollment_with_price(db, &first.id, &quiet.id, 500).await?;

    let dashboard = ReportService::new(db).dashboard().await?;

    assert_eq!(dashboard.admins, 1);
    assert_eq!(dashboard.teachers, 2);
    assert_eq!(dashboard.learners, 2);
    assert_eq!(dashboard.courses, 2);
    assert_eq!(dashboard.enrollments, 3);
    assert_eq!(dashboard.revenue, 3000);

    assert_eq!(dashboard.top_courses[0].id, popular.id);
    assert_eq!(dashboard.top_courses[0].learners, 2);
    assert_eq!(dashboard.top_teachers[0].id, popular_teacher.id);
    assert_eq!(dashboard.top_teachers[0].name, "Grace Hopper");

    Ok(())
}

/// Tests an empty platform.
///
/// Expected: all zeros and empty rankings
#[tokio::test]
async fn empty_dashboard() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dashboard = ReportService::new(db).dashboard().await?;

    assert_eq!(dashboard.courses, 0);
    assert_eq!(dashboard.revenue, 0);
    assert!(dashboard.top_courses.is_empty());
    assert!(dashboard.top_teachers.is_empty());

    Ok(())
}

/// Tests the public ranking orders teachers by learners and honors the count.
///
/// Expected: only the busiest teacher when one is requested
#[tokio::test]
async fn ranks_top_teachers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let quiet = factory::user::create_user_with_role(db, Role::Teacher.id()).await?;
    let learner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_course(db, &busy.id).await?;
    let second = factory::create_course(db, &busy.id).await?;
    let third = factory::create_course(db, &quiet.id).await?;

    factory::create_enrollment(db, &learner.id, &first.id).await?;
    factory::create_enrollment(db, &other.id, &second.id).await?;
    factory::create_enrollment(db, &learner.id, &third.id).await?;

    let service = ReportService::new(db);

    let all = service.top_teachers(10).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, busy.id);
    assert_eq!(all[0].learners, 2);
    assert_eq!(all[1].learners, 1);

    let top = service.top_teachers(1).await?;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, busy.id);

    Ok(())
}
