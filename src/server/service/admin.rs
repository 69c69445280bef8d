//! User account administration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository, user::UserRepository},
    error::AppError,
    model::{
        course::total_pages,
        role::Role,
        user::{PaginatedUsers, UpdateUserAccountParams, User, UserWithCourseCount},
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists users with the number of courses each teaches or has joined.
    ///
    /// # Arguments
    /// - `role` - Only list users with this role when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Users per page
    pub async fn get_users(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);
        let course_repo = CourseRepository::new(self.db);
        let enrollment_repo = EnrollmentRepository::new(self.db);

        let (entities, total) = user_repo.get_paginated(role, page, per_page).await?;

        let mut users = Vec::with_capacity(entities.len());
        for entity in entities {
            let user = User::from_entity(entity)?;
            let course_count = match user.role {
                Role::Teacher => course_repo.count_by_author(&user.id).await?,
                Role::Learner => enrollment_repo.count_by_user(&user.id).await?,
                Role::Root | Role::Admin => 0,
            };

            users.push(UserWithCourseCount { user, course_count });
        }

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Changes a user's role and/or status.
    ///
    /// ROOT can never be assigned and a ROOT account can never be modified.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - ROOT assignment or ROOT target
    pub async fn update_account(&self, params: UpdateUserAccountParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if params.role == Some(Role::Root) {
            return Err(AppError::BadRequest(
                "The ROOT role cannot be assigned!".to_string(),
            ));
        }

        self.find_modifiable(&params.id).await?;

        let Some(updated) = user_repo.update_account(params).await? else {
            return Err(AppError::NotFound("User not found!".to_string()));
        };

        User::from_entity(updated)
    }

    /// Deletes a user and, through cascading keys, everything they own.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - Target is the ROOT account
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let user = self.find_modifiable(id).await?;

        UserRepository::new(self.db).delete(&user.id).await?;

        tracing::info!("Deleted user {}", user.id);

        Ok(())
    }

    async fn find_modifiable(&self, id: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found!".to_string()));
        };
        let user = User::from_entity(user)?;

        if user.role == Role::Root {
            return Err(AppError::BadRequest(
                "The ROOT account cannot be modified!".to_string(),
            ));
        }

        Ok(user)
    }
}
