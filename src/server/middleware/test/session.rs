use super::*;

/// Tests storing, reading and clearing the session user.
///
/// Expected: id readable after set, gone after clear
#[tokio::test]
async fn stores_and_clears_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id("user-1").await?;
    assert_eq!(auth_session.get_user_id().await?, Some("user-1".to_string()));

    auth_session.clear().await;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
