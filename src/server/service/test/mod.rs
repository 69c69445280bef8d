use crate::server::{
    error::{auth::AuthError, AppError},
    model::role::{ContentStatus, Role, UserStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod access;
mod auth;
mod lesson_test;
mod report;

/// True when the error is an access denial from the engine or the guard.
fn is_denied(error: &AppError) -> bool {
    matches!(error, AppError::AuthErr(AuthError::AccessDenied { .. }))
}
