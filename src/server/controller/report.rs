use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        report::{DashboardDto, TopTeacherDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::role::Role,
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Largest ranking the public top-teachers endpoint returns.
pub const MAX_TOP_TEACHERS: usize = 100;

/// Platform statistics for the admin dashboard.
///
/// # Access Control
/// - `AnyRole(ROOT, ADMIN)`
#[utoipa::path(
    get,
    path = "/api/admin/report",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(Role::STAFF)])
        .await?;

    let dashboard = ReportService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Teachers ranked by learners enrolled across their courses.
///
/// No login required.
#[utoipa::path(
    get,
    path = "/api/report/top-teachers/{count}",
    tag = REPORT_TAG,
    params(
        ("count" = usize, Path, description = "Number of teachers to return, 1 to 100")
    ),
    responses(
        (status = 200, description = "Top teachers", body = Vec<TopTeacherDto>),
        (status = 422, description = "Count out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_teachers(
    State(state): State<AppState>,
    Path(count): Path<usize>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = ValidationErrors::new();
    errors.check(
        (1..=MAX_TOP_TEACHERS).contains(&count),
        "count",
        "Count must be between 1 and 100!",
    );
    errors.finish()?;

    let teachers = ReportService::new(&state.db).top_teachers(count).await?;

    Ok((
        StatusCode::OK,
        Json(
            teachers
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<TopTeacherDto>>(),
        ),
    ))
}
