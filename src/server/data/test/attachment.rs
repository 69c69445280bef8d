use super::*;

/// Tests attachments of a lesson come back ordered by number.
///
/// Expected: numbered attachments in ascending order, other lessons excluded
#[tokio::test]
async fn gets_attachments_by_lesson_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let other_lesson = factory::create_lesson(db, &tree.chapter.id).await?;

    let repo = AttachmentRepository::new(db);
    for number in [3, 1, 2] {
        repo.create(CreateAttachmentParams {
            lesson_id: tree.lesson.id.clone(),
            number: Some(number),
            title: format!("Slides {}", number),
            description: None,
            url: format!("https://files.example.com/{}.pdf", number),
        })
        .await?;
    }
    factory::create_attachment(db, &other_lesson.id).await?;

    let attachments = repo.get_by_lesson(&tree.lesson.id).await?;
    let numbers: Vec<_> = attachments.iter().map(|a| a.number).collect();

    assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);

    Ok(())
}

/// Tests a partial update only touches the given fields.
///
/// Expected: url and status changed, title kept
#[tokio::test]
async fn partial_update_keeps_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let existing = factory::create_attachment(db, &tree.lesson.id).await?;

    let Some(updated) = AttachmentRepository::new(db)
        .update(
            &existing.id,
            UpdateAttachmentParams {
                url: Some("https://files.example.com/v2.pdf".to_string()),
                status: Some(ContentStatus::Inactive),
                ..Default::default()
            },
        )
        .await?
    else {
        panic!("Expected updated attachment");
    };

    assert_eq!(updated.url, "https://files.example.com/v2.pdf");
    assert_eq!(updated.status, ContentStatus::Inactive.id());
    assert_eq!(updated.title, existing.title);

    Ok(())
}

/// Tests deleting a course removes the attachments below it.
///
/// Expected: the attachment is gone after its course is deleted
#[tokio::test]
async fn course_delete_cascades_to_attachments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;
    let attachment = factory::create_attachment(db, &tree.lesson.id).await?;

    CourseRepository::new(db).delete(&tree.course.id).await?;

    let repo = AttachmentRepository::new(db);
    assert!(repo.find_by_id(&attachment.id).await?.is_none());
    assert_eq!(repo.delete(&attachment.id).await?, 0);

    Ok(())
}
