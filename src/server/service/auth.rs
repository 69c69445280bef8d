//! Signup and credential verification.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        role::{Role, UserStatus},
        user::{CreateUserParams, SignupParams, User},
    },
    util::password::{hash_password, verify_password},
};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a learner or teacher account.
    ///
    /// Learners start ACTIVE; teachers start PENDING until an admin activates them.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - E-mail already registered or role not self-assignable
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let status = match params.role {
            Role::Learner => UserStatus::Active,
            Role::Teacher => UserStatus::Pending,
            role => {
                return Err(AppError::BadRequest(format!(
                    "Role {} cannot be chosen at signup!",
                    role
                )))
            }
        };

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "E-mail address already exists!".to_string(),
            ));
        }

        let user = user_repo
            .create(CreateUserParams {
                email: params.email,
                password_hash: hash_password(&params.password)?,
                first_name: params.first_name,
                last_name: params.last_name,
                role: params.role,
                status,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AppError::BadRequest("E-mail address already exists!".to_string())
                } else {
                    err.into()
                }
            })?;

        tracing::info!("User {} signed up as {}", user.id, params.role);

        User::from_entity(user)
    }

    /// Verifies credentials and account status.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and account usable
    /// - `Err(AuthError::WrongCredentials)` - Unknown e-mail or wrong password
    /// - `Err(AuthError::AccountBanned)` - Account is banned
    /// - `Err(AuthError::AccountInactive)` - Account is inactive
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::WrongCredentials.into());
        };
        let user = User::from_entity(user)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::WrongCredentials.into());
        }

        match user.status {
            UserStatus::Banned => Err(AuthError::AccountBanned(user.id).into()),
            UserStatus::Inactive => Err(AuthError::AccountInactive(user.id).into()),
            UserStatus::Active | UserStatus::Pending => Ok(user),
        }
    }
}
