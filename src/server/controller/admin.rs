use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{PaginatedUsersDto, UpdateUserAccountDto, UserDto},
    },
    server::{
        controller::parse_user_status,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{role::Role, user::UpdateUserAccountParams},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct UserListParams {
    pub role: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

fn parse_role(value: Option<&str>) -> Result<Option<Role>, AppError> {
    value
        .map(|name| {
            Role::from_name(name)
                .ok_or_else(|| AppError::invalid_field("role", format!("Unknown role {}!", name)))
        })
        .transpose()
}

/// List users with their course counts.
///
/// Teachers count authored courses, learners count joined courses.
///
/// # Access Control
/// - `AnyRole(ROOT, ADMIN)`
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("role" = Option<String>, Query, description = "Only list users with this role"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 422, description = "Unknown role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(Role::STAFF)])
        .await?;

    let role = parse_role(params.role.as_deref())?;

    let users = AdminService::new(&state.db)
        .get_users(role, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Change a user's role or account status.
///
/// # Access Control
/// - `AnyRole(ROOT, ADMIN)`
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}",
    tag = ADMIN_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserAccountDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "ROOT role or ROOT account", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Unknown role or status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUserAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(Role::STAFF)])
        .await?;

    let user = AdminService::new(&state.db)
        .update_account(UpdateUserAccountParams {
            id: user_id,
            role: parse_role(payload.role.as_deref())?,
            status: parse_user_status(payload.status.as_deref())?,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user with everything they own.
///
/// # Access Control
/// - `AnyRole(ROOT, ADMIN)`
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    tag = ADMIN_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "ROOT account", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(Role::STAFF)])
        .await?;

    AdminService::new(&state.db).delete_user(&user_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted!"))))
}
