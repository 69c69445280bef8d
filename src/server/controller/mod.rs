//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, validate and convert DTOs into
//! parameter models, call a service and convert the result back into a DTO.

pub mod admin;
pub mod attachment;
pub mod auth;
pub mod chapter;
pub mod comment;
pub mod course;
pub mod lesson;
pub mod lesson_test;
pub mod report;
pub mod user;

use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::role::{ContentStatus, UserStatus},
};

/// Query parameters for paginated listings.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Parses an optional content status name from a request body.
///
/// # Returns
/// - `Ok(None)` - No status given
/// - `Ok(Some(status))` - Known status name
/// - `Err(AppError::Validation)` - Unknown status name
pub(crate) fn parse_content_status(
    value: Option<&str>,
) -> Result<Option<ContentStatus>, AppError> {
    value
        .map(|name| {
            ContentStatus::from_name(name).ok_or_else(|| {
                AppError::invalid_field("status", format!("Unknown status {}!", name))
            })
        })
        .transpose()
}

/// Parses an optional account status name from a request body.
pub(crate) fn parse_user_status(value: Option<&str>) -> Result<Option<UserStatus>, AppError> {
    value
        .map(|name| {
            UserStatus::from_name(name).ok_or_else(|| {
                AppError::invalid_field("status", format!("Unknown status {}!", name))
            })
        })
        .transpose()
}
