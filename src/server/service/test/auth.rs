use super::*;
use crate::server::{model::user::SignupParams, service::auth::AuthService};

fn signup(email: &str, role: Role) -> SignupParams {
    SignupParams {
        email: email.to_string(),
        password: "correct horse".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role,
    }
}

/// Tests learners start active and teachers start pending.
///
/// Expected: Ok(User) with ACTIVE and PENDING statuses
#[tokio::test]
async fn signup_status_depends_on_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let learner = service
        .signup(signup("learner@example.com", Role::Learner))
        .await?;
    let teacher = service
        .signup(signup("teacher@example.com", Role::Teacher))
        .await?;

    assert_eq!(learner.status, UserStatus::Active);
    assert_eq!(teacher.status, UserStatus::Pending);
    assert_ne!(learner.password_hash, "correct horse");

    Ok(())
}

/// Tests a second signup with the same e-mail in other casing.
///
/// Expected: Err(BadRequest("E-mail address already exists!"))
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .signup(signup("ada@example.com", Role::Learner))
        .await?;

    match service.signup(signup("ADA@example.com", Role::Learner)).await {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "E-mail address already exists!")
        }
        other => panic!("Expected BadRequest, got: {:?}", other),
    }

    Ok(())
}

/// Tests staff roles cannot be chosen at signup.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_staff_signup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .signup(signup("admin@example.com", Role::Admin))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests login with right and wrong passwords.
///
/// Expected: Ok(User) for the right password, WrongCredentials otherwise
#[tokio::test]
async fn login_verifies_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let created = service
        .signup(signup("ada@example.com", Role::Learner))
        .await?;

    let user = service.login("Ada@Example.com", "correct horse").await?;
    assert_eq!(user.id, created.id);

    assert!(matches!(
        service.login("ada@example.com", "wrong").await,
        Err(AppError::AuthErr(AuthError::WrongCredentials))
    ));
    assert!(matches!(
        service.login("nobody@example.com", "correct horse").await,
        Err(AppError::AuthErr(AuthError::WrongCredentials))
    ));

    Ok(())
}

/// Tests a banned account cannot log in.
///
/// Expected: Err(AccountBanned)
#[tokio::test]
async fn login_rejects_banned_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let user = service
        .signup(signup("ada@example.com", Role::Learner))
        .await?;

    crate::server::data::user::UserRepository::new(db)
        .update_account(crate::server::model::user::UpdateUserAccountParams {
            id: user.id,
            role: None,
            status: Some(UserStatus::Banned),
        })
        .await?;

    assert!(matches!(
        service.login("ada@example.com", "correct horse").await,
        Err(AppError::AuthErr(AuthError::AccountBanned(_)))
    ));

    Ok(())
}
