use super::*;

fn question(text: &str, answer: &str) -> Question {
    Question {
        question: text.to_string(),
        a: "1".to_string(),
        b: "2".to_string(),
        c: "3".to_string(),
        d: "4".to_string(),
        answer: answer.to_string(),
    }
}

/// Tests questions are stored in the JSON column and read back intact.
///
/// Expected: the same questions, in order, after a reload
#[tokio::test]
async fn stores_questions_as_json() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let questions = vec![question("1 + 1 = ?", "b"), question("2 + 2 = ?", "d")];

    let repo = LessonTestRepository::new(db);
    let created = repo
        .create(CreateLessonTestParams {
            lesson_id: tree.lesson.id.clone(),
            number: Some(1),
            title: "Arithmetic".to_string(),
            description: None,
            questions: questions.clone(),
        })
        .await?;

    let Some(stored) = repo.find_by_id(&created.id).await? else {
        panic!("Expected stored test");
    };
    let loaded = LessonTest::from_entity(stored)?;

    assert_eq!(loaded.questions, questions);
    assert_eq!(loaded.status, ContentStatus::Active);

    Ok(())
}

/// Tests a partial update leaves unset fields alone.
///
/// Expected: title changed, questions and number kept
#[tokio::test]
async fn partial_update_keeps_other_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let existing = factory::create_lesson_test(db, &tree.lesson.id).await?;

    let repo = LessonTestRepository::new(db);
    let Some(updated) = repo
        .update(
            &existing.id,
            UpdateLessonTestParams {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
    else {
        panic!("Expected updated test");
    };

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.number, existing.number);
    assert_eq!(updated.questions, existing.questions);

    let replaced = repo
        .update(
            &existing.id,
            UpdateLessonTestParams {
                questions: Some(vec![question("Pick c", "c")]),
                ..Default::default()
            },
        )
        .await?;
    let replaced = LessonTest::from_entity(replaced.unwrap())?;
    assert_eq!(replaced.questions.len(), 1);
    assert_eq!(replaced.questions[0].answer, "c");

    Ok(())
}

/// Tests deleting a lesson removes its tests.
///
/// Expected: the test is gone after its lesson is deleted
#[tokio::test]
async fn lesson_delete_cascades_to_tests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let quiz = factory::create_lesson_test(db, &tree.lesson.id).await?;

    LessonRepository::new(db).delete(&tree.lesson.id).await?;

    assert!(LessonTestRepository::new(db)
        .find_by_id(&quiz.id)
        .await?
        .is_none());

    Ok(())
}
