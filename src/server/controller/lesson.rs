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
        lesson::{CreateLessonDto, LessonDetailDto, LessonDto, UpdateLessonDto},
    },
    server::{
        controller::parse_content_status,
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::ContentRef,
            lesson::{CreateLessonParams, UpdateLessonParams},
        },
        service::lesson::LessonService,
        state::AppState,
    },
};

/// Tag for grouping lesson endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lesson";

/// Create a lesson in a chapter.
///
/// # Access Control
/// - `WriteContent` on the chapter - Course author, ADMIN or ROOT
#[utoipa::path(
    post,
    path = "/api/lessons",
    tag = LESSON_TAG,
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Lesson created", body = LessonDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Chapter not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Chapter(
            payload.chapter_id.clone(),
        ))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors
        .require_text("title", &payload.title)
        .require_text("url", &payload.url)
        .check(
            payload.position.is_none_or(|p| p > 0),
            "position",
            "Lesson position must be positive!",
        );
    errors.finish()?;

    let lesson = LessonService::new(&state.db)
        .create(CreateLessonParams {
            chapter_id: payload.chapter_id,
            position: payload.position,
            title: payload.title.trim().to_string(),
            description: payload.description,
            url: payload.url.trim().to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(lesson.into_dto())))
}

/// Get a lesson with its tests, attachments and comments.
///
/// # Access Control
/// - `ReadContent` - Enrolled learner, course author, ADMIN or ROOT
#[utoipa::path(
    get,
    path = "/api/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("lesson_id" = String, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson detail", body = LessonDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ReadContent(ContentRef::Lesson(
            lesson_id.clone(),
        ))])
        .await?;

    let lesson = LessonService::new(&state.db).get_detail(&lesson_id).await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

/// Update a lesson.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    put,
    path = "/api/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("lesson_id" = String, Path, description = "Lesson ID")
    ),
    request_body = UpdateLessonDto,
    responses(
        (status = 200, description = "Lesson updated", body = LessonDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<String>,
    Json(payload): Json<UpdateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Lesson(
            lesson_id.clone(),
        ))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors
        .optional_text("title", payload.title.as_deref())
        .optional_text("url", payload.url.as_deref())
        .check(
            payload.position.is_none_or(|p| p > 0),
            "position",
            "Lesson position must be positive!",
        );
    errors.finish()?;

    let lesson = LessonService::new(&state.db)
        .update(
            &lesson_id,
            UpdateLessonParams {
                status: parse_content_status(payload.status.as_deref())?,
                position: payload.position,
                title: payload.title.map(|t| t.trim().to_string()),
                description: payload.description,
                url: payload.url.map(|u| u.trim().to_string()),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

/// Delete a lesson with its tests, attachments and comments.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    delete,
    path = "/api/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("lesson_id" = String, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Lesson(
            lesson_id.clone(),
        ))])
        .await?;

    LessonService::new(&state.db).delete(&lesson_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Lesson deleted!"))))
}
