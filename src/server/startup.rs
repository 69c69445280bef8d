use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::{
        role::{Role, UserStatus},
        user::CreateUserParams,
    },
    util::password::hash_password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same SQLite database and expire after 7 days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    use time::Duration;

    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Makes sure a ROOT account exists.
///
/// Creates one from `ROOT_EMAIL` / `ROOT_PASSWORD` when the database has none. Without
/// those variables the server still starts, but the admin routes stay unreachable until
/// it is restarted with `ROOT_EMAIL` and `ROOT_PASSWORD` set.
///
/// # Returns
/// - `Ok(())` - ROOT exists, was created, or credentials are missing
/// - `Err(AppError)` - Database or hashing failure
pub async fn check_for_root(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.role_exists(Role::Root).await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.root_email, &config.root_password) else {
        tracing::warn!(
            "No ROOT account exists, set ROOT_EMAIL and ROOT_PASSWORD to create one on startup"
        );
        return Ok(());
    };

    let root = user_repo
        .create(CreateUserParams {
            email: email.clone(),
            password_hash: hash_password(password)?,
            first_name: "Root".to_string(),
            last_name: "Account".to_string(),
            role: Role::Root,
            status: UserStatus::Active,
        })
        .await?;

    tracing::info!("Created ROOT account {}", root.email);

    Ok(())
}
