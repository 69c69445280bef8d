//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{AdminUserDto, PaginatedUsersDto, PublicProfileDto, UserDto},
    server::{
        error::AppError,
        model::{
            course::Course,
            role::{Role, UserStatus},
        },
    },
};

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Argon2 PHC hash; never leaves the server.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(_))` - Stored role or status id is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            role: Role::try_from(entity.role)?,
            status: UserStatus::try_from(entity.status)?,
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            created_at: entity.created_at,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role.name().to_string(),
            status: self.status.name().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub status: UserStatus,
}

/// Parameters for a self-service signup, before hashing.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Admin changes to a user account; `None` leaves the field untouched.
#[derive(Debug, Clone)]
pub struct UpdateUserAccountParams {
    pub id: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

/// Self-service profile changes; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// What anyone may see about a user: name, role and the active courses they teach.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicProfile {
    pub user: User,
    pub courses: Vec<Course>,
}

impl PublicProfile {
    pub fn into_dto(self) -> PublicProfileDto {
        PublicProfileDto {
            id: self.user.id,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
            role: self.user.role.name().to_string(),
            courses: self.courses.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}

/// User with the number of courses they teach or have joined.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithCourseCount {
    pub user: User,
    pub course_count: u64,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<UserWithCourseCount>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self
                .users
                .into_iter()
                .map(|u| AdminUserDto {
                    user: u.user.into_dto(),
                    course_count: u.course_count,
                })
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
