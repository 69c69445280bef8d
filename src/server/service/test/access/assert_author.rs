use super::*;

#[test]
fn accepts_same_id() {
    assert!(AccessService::assert_author("teacher-1", "teacher-1").is_ok());
}

#[test]
fn accepts_uuid_in_other_casing() {
    let id = "0b6a4f0e-3c7d-4e7a-9a55-2f1d8f1c2b3a";

    assert!(AccessService::assert_author(id, &format!(" {} ", id.to_uppercase())).is_ok());
}

/// Tests a non-author gets the dedicated message.
///
/// Expected: Err(AccessDenied) with "This course is not yours."
#[test]
fn rejects_other_requester() {
    let result = AccessService::assert_author("teacher-1", "teacher-2");

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied {
            user_id, message, ..
        })) => {
            assert_eq!(user_id, "teacher-2");
            assert_eq!(message, NOT_COURSE_AUTHOR);
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }
}
