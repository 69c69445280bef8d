use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, SignupDto, UserDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::{role::Role, user::SignupParams},
        service::auth::{AuthService, MIN_PASSWORD_LENGTH},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a learner or teacher account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - E-mail already registered
/// - `422 Unprocessable Entity` - Invalid fields
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "E-mail address already exists", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = match payload.role.as_deref() {
        None => Some(Role::Learner),
        Some(name) => Role::from_name(name).filter(|r| matches!(r, Role::Learner | Role::Teacher)),
    };

    let mut errors = ValidationErrors::new();
    errors
        .check(
            payload.email.contains('@') && !payload.email.trim().is_empty(),
            "email",
            "A valid e-mail address is required!",
        )
        .check(
            payload.password.chars().count() >= MIN_PASSWORD_LENGTH,
            "password",
            "Password must be at least 6 characters!",
        )
        .require_text("first_name", &payload.first_name)
        .require_text("last_name", &payload.last_name)
        .check(role.is_some(), "role", "Role must be LEARNER or TEACHER!");
    errors.finish()?;

    let Some(role) = role else {
        return Err(AppError::invalid_field("role", "Role must be LEARNER or TEACHER!"));
    };

    let user = AuthService::new(&state.db)
        .signup(SignupParams {
            email: payload.email,
            password: payload.password,
            first_name: payload.first_name.trim().to_string(),
            last_name: payload.last_name.trim().to_string(),
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with e-mail and password.
///
/// Stores the user id in the session and issues a fresh session id.
///
/// # Returns
/// - `200 OK` - Logged in user
/// - `401 Unauthorized` - Wrong e-mail or password
/// - `403 Forbidden` - Account banned or inactive
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Wrong e-mail or password", body = ErrorDto),
        (status = 403, description = "Account banned or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    let auth_session = AuthSession::new(&session);
    auth_session.cycle_id().await?;
    auth_session.set_user_id(&user.id).await?;

    tracing::debug!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out, clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out!"))))
}

/// Get the currently logged in user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Session user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
