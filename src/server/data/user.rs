//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating, querying, updating and deleting user
//! records, including the role-filtered pagination used by the admin listing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        role::Role,
        user::{CreateUserParams, UpdateProfileParams, UpdateUserAccountParams},
    },
    util::id::{new_id, normalize_id},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a freshly generated id.
    ///
    /// The e-mail is stored lowercased and trimmed.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique e-mail violations
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(new_id()),
            email: ActiveValue::Set(normalize_email(&params.email)),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            role: ActiveValue::Set(params.role.id()),
            status: ActiveValue::Set(params.status.id()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by id.
    ///
    /// The id is normalized before lookup, so casing and surrounding whitespace of
    /// UUIDs do not matter.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(normalize_id(id))
            .one(self.db)
            .await
    }

    /// Finds a user by e-mail address, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .one(self.db)
            .await
    }

    /// Gets the users with the given ids, in no particular order.
    pub async fn find_by_ids(&self, ids: Vec<String>) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Checks whether any user holds the given role.
    pub async fn role_exists(&self, role: Role) -> Result<bool, DbErr> {
        Ok(self.count_by_role(role).await? > 0)
    }

    /// Counts users holding the given role.
    pub async fn count_by_role(&self, role: Role) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.id()))
            .count(self.db)
            .await
    }

    /// Gets users with pagination, optionally filtered by role.
    ///
    /// Users are ordered by creation time, newest first.
    ///
    /// # Arguments
    /// - `role` - Only return users with this role when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users of the requested page and the total matching user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role.id()));
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Updates a user's role and status.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_account(
        &self,
        params: UpdateUserAccountParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(&params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.clone().into();
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role.id());
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.id());
        }

        if !active.is_changed() {
            return Ok(Some(user));
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Applies self-service profile changes; `None` fields are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update_profile(
        &self,
        id: &str,
        params: UpdateProfileParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.clone().into();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }

        if !active.is_changed() {
            return Ok(Some(user));
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Replaces the stored password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Hash replaced
    /// - `Ok(false)` - No user with that id
    pub async fn set_password_hash(&self, id: &str, password_hash: String) -> Result<bool, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(false);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.password_hash = ActiveValue::Set(password_hash);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a user; foreign keys cascade to their courses, enrollments and comments.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows (0 when the user did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(normalize_id(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
