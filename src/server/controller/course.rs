use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::{
            CourseContentDto, CourseDto, CourseSummaryDto, CreateCourseDto, EnrollmentDto,
            PaginatedCoursesDto, UpdateCourseDto,
        },
    },
    server::{
        controller::{parse_content_status, PaginationParams},
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::ContentRef,
            course::{CreateCourseParams, UpdateCourseParams},
            role::{ContentStatus, Role},
        },
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List active courses.
///
/// Public catalog, newest first.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Active courses", body = PaginatedCoursesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .get_active_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(courses.into_dto())))
}

/// Create a course.
///
/// The caller becomes the author. Status defaults to `DRAFT`.
///
/// # Access Control
/// - `AnyRole(TEACHER)`
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a teacher", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(&[Role::Teacher])])
        .await?;

    let mut errors = ValidationErrors::new();
    errors
        .require_text("title", &payload.title)
        .check(payload.price >= 0, "price", "Price must not be negative!");
    errors.finish()?;

    let status = parse_content_status(payload.status.as_deref())?.unwrap_or(ContentStatus::Draft);

    let course = CourseService::new(&state.db)
        .create(CreateCourseParams {
            author_id: user.id,
            title: payload.title.trim().to_string(),
            description: payload.description,
            price: payload.price,
            status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Get the public summary of an active course.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course summary", body = CourseSummaryDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_summary(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = CourseService::new(&state.db).get_summary(&course_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Update course details.
///
/// # Access Control
/// - `CourseAuthor` - Only the author, regardless of role
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = CourseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "This course is not yours", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<String>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CourseAuthor(course_id.clone())])
        .await?;

    let mut errors = ValidationErrors::new();
    errors
        .optional_text("title", payload.title.as_deref())
        .check(
            payload.price.is_none_or(|price| price >= 0),
            "price",
            "Price must not be negative!",
        );
    errors.finish()?;

    let course = CourseService::new(&state.db)
        .update(
            &course_id,
            UpdateCourseParams {
                status: parse_content_status(payload.status.as_deref())?,
                title: payload.title.map(|t| t.trim().to_string()),
                description: payload.description,
                price: payload.price,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course with all of its content.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Course(
            course_id.clone(),
        ))])
        .await?;

    CourseService::new(&state.db).delete(&course_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Course deleted!"))))
}

/// Get the full content tree of a course.
///
/// # Access Control
/// - `ReadContent` - Enrolled learner, course author, ADMIN or ROOT
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/content",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course content", body = CourseContentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_content(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ReadContent(ContentRef::Course(
            course_id.clone(),
        ))])
        .await?;

    let content = CourseService::new(&state.db).get_content(&course_id).await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}

/// Join an active course, paying its current price.
///
/// # Access Control
/// - `AnyRole(LEARNER)`
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/enroll",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 201, description = "Enrolled", body = EnrollmentDto),
        (status = 400, description = "Already joined", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a learner", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enroll_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(&[Role::Learner])])
        .await?;

    let enrollment = CourseService::new(&state.db)
        .enroll(&user.id, &course_id)
        .await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_dto())))
}
