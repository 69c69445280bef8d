use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::course::CourseDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Role name: `ROOT`, `ADMIN`, `LEARNER` or `TEACHER`.
    pub role: String,
    /// Account status name: `INACTIVE`, `ACTIVE`, `PENDING` or `BANNED`.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct SignupDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// `LEARNER` (default) or `TEACHER`.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// User row in the admin listing.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AdminUserDto {
    #[serde(flatten)]
    pub user: UserDto,
    /// Courses authored when the user teaches, courses joined otherwise.
    pub course_count: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<AdminUserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdateUserAccountDto {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdateProfileDto {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}

/// Public view of a user; e-mail and account status stay private.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PublicProfileDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    /// Active courses the user teaches, newest first.
    pub courses: Vec<CourseDto>,
}
