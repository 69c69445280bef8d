use super::*;
use crate::server::{
    model::lesson_test::{CreateLessonTestParams, Question, UpdateLessonTestParams},
    service::lesson_test::LessonTestService,
};

fn question(answer: &str) -> Question {
    Question {
        question: "Which keyword declares an immutable binding?".to_string(),
        a: "let".to_string(),
        b: "mut".to_string(),
        c: "var".to_string(),
        d: "const".to_string(),
        answer: answer.to_string(),
    }
}

/// Tests a created test reads back with its questions.
///
/// Expected: Ok(LessonTest) with the same questions from get_by_id
#[tokio::test]
async fn creates_and_reads_test() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;

    let service = LessonTestService::new(db);
    let created = service
        .create(CreateLessonTestParams {
            lesson_id: tree.lesson.id.clone(),
            number: None,
            title: "Bindings".to_string(),
            description: Some("Warm-up".to_string()),
            questions: vec![question("a")],
        })
        .await?;

    let fetched = service.get_by_id(&created.id).await?;

    assert_eq!(fetched, created);
    assert_eq!(fetched.questions, vec![question("a")]);
    assert_eq!(fetched.lesson_id, tree.lesson.id);

    Ok(())
}

/// Tests updating only the questions.
///
/// Expected: questions replaced, title kept
#[tokio::test]
async fn replaces_questions_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let existing = factory::create_lesson_test(db, &tree.lesson.id).await?;

    let updated = LessonTestService::new(db)
        .update(
            &existing.id,
            UpdateLessonTestParams {
                questions: Some(vec![question("a"), question("d")]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, existing.title);
    assert_eq!(updated.questions.len(), 2);
    assert_eq!(updated.questions[1].answer, "d");

    Ok(())
}

/// Tests operations on a missing test.
///
/// Expected: Err(NotFound("Test not found!")) for get, update and delete
#[tokio::test]
async fn missing_test_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LessonTestService::new(db);

    let results = [
        service.get_by_id("missing").await.map(|_| ()),
        service
            .update("missing", UpdateLessonTestParams::default())
            .await
            .map(|_| ()),
        service.delete("missing").await,
    ];

    for result in results {
        match result {
            Err(AppError::NotFound(message)) => assert_eq!(message, "Test not found!"),
            other => panic!("Expected NotFound, got: {:?}", other),
        }
    }

    Ok(())
}
