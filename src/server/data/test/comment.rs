use super::*;

/// Tests creating, editing and deleting a comment.
///
/// Expected: content replaced, then the comment is gone
#[tokio::test]
async fn edits_and_deletes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_lesson_tree(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            lesson_id: tree.lesson.id.clone(),
            user_id: tree.author.id.clone(),
            content: "First!".to_string(),
        })
        .await?;

    let updated = repo
        .update_content(&comment.id, "Edited".to_string())
        .await?
        .unwrap();
    assert_eq!(updated.content, "Edited");
    assert_eq!(repo.get_by_lesson(&tree.lesson.id).await?.len(), 1);

    assert_eq!(repo.delete(&comment.id).await?, 1);
    assert!(repo.find_by_id(&comment.id).await?.is_none());

    Ok(())
}
