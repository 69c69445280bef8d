use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        access::ContentRef,
        role::{Role, UserStatus},
        user::User,
    },
    service::access::AccessService,
};

/// A requirement a route places on the session principal.
#[derive(Debug, Clone)]
pub enum Permission {
    /// Principal holds one of the listed roles.
    AnyRole(&'static [Role]),
    /// Principal may read the course the resource belongs to.
    ReadContent(ContentRef),
    /// Principal may write under the course the resource belongs to.
    WriteContent(ContentRef),
    /// Principal authored the course with this id.
    CourseAuthor(String),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session principal and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Principal satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists (404)
    /// - `Err(AuthError::AccountBanned)` / `Err(AuthError::AccountInactive)` - Account was
    ///   banned or deactivated after login (403)
    /// - `Err(AuthError::AccessDenied)` - First permission not satisfied (403)
    /// - `Err(AppError::NotFound)` - A checked resource does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(&user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = User::from_entity(user)?;

        match user.status {
            UserStatus::Banned => return Err(AuthError::AccountBanned(user.id).into()),
            UserStatus::Inactive => return Err(AuthError::AccountInactive(user.id).into()),
            UserStatus::Active | UserStatus::Pending => {}
        }

        let access = AccessService::new(self.db);

        for permission in permissions {
            match permission {
                Permission::AnyRole(roles) => {
                    if !roles.contains(&user.role) {
                        let names: Vec<&str> = roles.iter().map(|role| role.name()).collect();
                        return Err(AuthError::AccessDenied {
                            user_id: user.id.clone(),
                            reason: format!("role {} not in {:?}", user.role, names),
                            message: format!(
                                "Authentication failed! {} permission required!",
                                names.join(" or ")
                            ),
                        }
                        .into());
                    }
                }
                Permission::ReadContent(target) => {
                    access.require_read(&user.id, target).await?;
                }
                Permission::WriteContent(target) => {
                    access.require_write(&user.id, target).await?;
                }
                Permission::CourseAuthor(course_id) => {
                    let owner = access
                        .resolve_course(&ContentRef::Course(course_id.clone()))
                        .await?;
                    AccessService::assert_author(&owner.author_id, &user.id)?;
                }
            }
        }

        Ok(user)
    }
}
