//! Current-user views, profiles and password changes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        course::Course,
        role::{ContentStatus, UserStatus},
        user::{PublicProfile, UpdateProfileParams, User},
    },
    util::password::{hash_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the courses a user authored, newest first.
    pub async fn get_teaching_courses(&self, user_id: &str) -> Result<Vec<Course>, AppError> {
        let courses = CourseRepository::new(self.db).get_by_author(user_id).await?;

        courses.into_iter().map(Course::from_entity).collect()
    }

    /// Gets the courses a user is enrolled in, newest first.
    pub async fn get_learning_courses(&self, user_id: &str) -> Result<Vec<Course>, AppError> {
        let enrollments = EnrollmentRepository::new(self.db).get_by_user(user_id).await?;
        let course_ids = enrollments.into_iter().map(|e| e.course_id).collect();

        let courses = CourseRepository::new(self.db).get_by_ids(course_ids).await?;

        courses.into_iter().map(Course::from_entity).collect()
    }

    /// Gets a user's public profile with the active courses they teach.
    ///
    /// # Returns
    /// - `Ok(PublicProfile)` - The profile
    /// - `Err(AppError::NotFound)` - Unknown user, or the account is banned or inactive
    pub async fn get_public_profile(&self, user_id: &str) -> Result<PublicProfile, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found!".to_string()));
        };
        let user = User::from_entity(user)?;

        if matches!(user.status, UserStatus::Banned | UserStatus::Inactive) {
            return Err(AppError::NotFound("User not found!".to_string()));
        }

        let courses = self
            .get_teaching_courses(&user.id)
            .await?
            .into_iter()
            .filter(|course| course.status == ContentStatus::Active)
            .collect();

        Ok(PublicProfile { user, courses })
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .update_profile(user_id, params)
            .await?
        else {
            return Err(AppError::NotFound("User not found!".to_string()));
        };

        User::from_entity(user)
    }

    /// Replaces the password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AuthError::WrongPassword)` - `old_password` does not match (401)
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn change_password(
        &self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found!".to_string()));
        };

        if !verify_password(old_password, &user.password_hash)? {
            return Err(AuthError::WrongPassword(user.id).into());
        }

        let password_hash = hash_password(new_password)?;
        if !user_repo.set_password_hash(&user.id, password_hash).await? {
            return Err(AppError::NotFound("User not found!".to_string()));
        }

        tracing::info!("User {} changed their password", user.id);

        Ok(())
    }
}
