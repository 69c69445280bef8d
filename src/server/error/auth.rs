use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned whenever the access-control engine denies a read or write.
pub const PERMISSION_DENIED: &str = "You do not have permission to do this action!";

/// Message returned when a course is modified by someone other than its author.
pub const NOT_COURSE_AUTHOR: &str = "This course is not yours.";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(String),

    /// The principal exists but the requested action is not allowed.
    ///
    /// `reason` is logged only; `message` is returned to the client.
    #[error("Access denied for user {user_id}: {reason}")]
    AccessDenied {
        user_id: String,
        reason: String,
        message: String,
    },

    /// Unknown e-mail or password mismatch on login.
    #[error("Wrong e-mail or password")]
    WrongCredentials,

    /// Old password did not match on a password change.
    #[error("Wrong old password for user {0}")]
    WrongPassword(String),

    /// Login or session use on a banned account.
    #[error("Account {0} is banned")]
    AccountBanned(String),

    /// Login or session use on an inactive account.
    #[error("Account {0} is inactive")]
    AccountInactive(String),
}

impl AuthError {
    /// Denial with the engine's fixed permission message.
    pub fn permission_denied(user_id: &str, reason: impl Into<String>) -> Self {
        Self::AccessDenied {
            user_id: user_id.to_string(),
            reason: reason.into(),
            message: PERMISSION_DENIED.to_string(),
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `WrongCredentials` / `WrongPassword` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found!"
/// - `AccessDenied` / `AccountBanned` / `AccountInactive` → 403 Forbidden
///
/// Denials are logged at debug level with the principal and the reason.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "You are not logged in!".to_string()),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found!".to_string()),
            Self::AccessDenied { message, .. } => (StatusCode::FORBIDDEN, message),
            Self::WrongCredentials => (
                StatusCode::UNAUTHORIZED,
                "Wrong e-mail or password!".to_string(),
            ),
            Self::WrongPassword(_) => (
                StatusCode::UNAUTHORIZED,
                "Incorrect old password!".to_string(),
            ),
            Self::AccountBanned(_) => (
                StatusCode::FORBIDDEN,
                "Your account has been banned!".to_string(),
            ),
            Self::AccountInactive(_) => {
                (StatusCode::FORBIDDEN, "Your account is inactive!".to_string())
            }
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
