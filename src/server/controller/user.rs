use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::CourseDto,
        user::{ChangePasswordDto, PublicProfileDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParams,
        service::{auth::MIN_PASSWORD_LENGTH, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Courses authored by the logged in user.
#[utoipa::path(
    get,
    path = "/api/users/me/teaching",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Authored courses", body = Vec<CourseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teaching_courses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let courses = UserService::new(&state.db)
        .get_teaching_courses(&user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            courses
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<CourseDto>>(),
        ),
    ))
}

/// Courses the logged in user has joined.
#[utoipa::path(
    get,
    path = "/api/users/me/learning",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Joined courses", body = Vec<CourseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_learning_courses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let courses = UserService::new(&state.db)
        .get_learning_courses(&user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            courses
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<CourseDto>>(),
        ),
    ))
}

/// Profile of the logged in user.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Own profile", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account banned or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the logged in user's name.
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account banned or inactive", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mut errors = ValidationErrors::new();
    errors
        .optional_text("first_name", payload.first_name.as_deref())
        .optional_text("last_name", payload.last_name.as_deref());
    errors.finish()?;

    let user = UserService::new(&state.db)
        .update_profile(
            &user.id,
            UpdateProfileParams {
                first_name: payload.first_name.map(|n| n.trim().to_string()),
                last_name: payload.last_name.map(|n| n.trim().to_string()),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the logged in user's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `401 Unauthorized` - Not logged in, or the old password is wrong
/// - `422 Unprocessable Entity` - New password too short
#[utoipa::path(
    put,
    path = "/api/users/me/password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 401, description = "Not logged in or incorrect old password", body = ErrorDto),
        (status = 403, description = "Account banned or inactive", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mut errors = ValidationErrors::new();
    errors
        .require_text("old_password", &payload.old_password)
        .check(
            payload.new_password.chars().count() >= MIN_PASSWORD_LENGTH,
            "new_password",
            "Password must be at least 6 characters!",
        );
    errors.finish()?;

    UserService::new(&state.db)
        .change_password(&user.id, &payload.old_password, &payload.new_password)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password changed!"))))
}

/// Public profile of any user with the active courses they teach.
///
/// No login required.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/profile",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Public profile", body = PublicProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db)
        .get_public_profile(&user_id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
