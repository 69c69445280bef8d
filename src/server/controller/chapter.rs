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
        chapter::{ChapterDto, ChapterWithLessonsDto, CreateChapterDto, UpdateChapterDto},
    },
    server::{
        controller::parse_content_status,
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::ContentRef,
            chapter::{CreateChapterParams, UpdateChapterParams},
            role::Role,
        },
        service::chapter::ChapterService,
        state::AppState,
    },
};

/// Tag for grouping chapter endpoints in OpenAPI documentation
pub static CHAPTER_TAG: &str = "chapter";

/// Create a chapter in a course.
///
/// The number defaults to the next one in the course and must be unique within it.
///
/// # Access Control
/// - `AnyRole(ROOT, ADMIN, TEACHER)`
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    post,
    path = "/api/chapters",
    tag = CHAPTER_TAG,
    request_body = CreateChapterDto,
    responses(
        (status = 201, description = "Chapter created", body = ChapterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 422, description = "Validation failed or duplicate number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chapter(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateChapterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[
            Permission::AnyRole(Role::EDITORS),
            Permission::WriteContent(ContentRef::Course(payload.course_id.clone())),
        ])
        .await?;

    let mut errors = ValidationErrors::new();
    errors.require_text("title", &payload.title).check(
        payload.number.is_none_or(|n| n > 0),
        "number",
        "Chapter number must be positive!",
    );
    errors.finish()?;

    let chapter = ChapterService::new(&state.db)
        .create(CreateChapterParams {
            course_id: payload.course_id,
            number: payload.number,
            title: payload.title.trim().to_string(),
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(chapter.into_dto())))
}

/// Get a chapter with its lessons.
///
/// # Access Control
/// - `ReadContent` - Enrolled learner, course author, ADMIN or ROOT
#[utoipa::path(
    get,
    path = "/api/chapters/{chapter_id}",
    tag = CHAPTER_TAG,
    params(
        ("chapter_id" = String, Path, description = "Chapter ID")
    ),
    responses(
        (status = 200, description = "Chapter with lessons", body = ChapterWithLessonsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Chapter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chapter(
    State(state): State<AppState>,
    session: Session,
    Path(chapter_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ReadContent(ContentRef::Chapter(
            chapter_id.clone(),
        ))])
        .await?;

    let chapter = ChapterService::new(&state.db)
        .get_with_lessons(&chapter_id)
        .await?;

    Ok((StatusCode::OK, Json(chapter.into_dto())))
}

/// Update a chapter.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    put,
    path = "/api/chapters/{chapter_id}",
    tag = CHAPTER_TAG,
    params(
        ("chapter_id" = String, Path, description = "Chapter ID")
    ),
    request_body = UpdateChapterDto,
    responses(
        (status = 200, description = "Chapter updated", body = ChapterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Chapter not found", body = ErrorDto),
        (status = 422, description = "Validation failed or duplicate number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_chapter(
    State(state): State<AppState>,
    session: Session,
    Path(chapter_id): Path<String>,
    Json(payload): Json<UpdateChapterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Chapter(
            chapter_id.clone(),
        ))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors.optional_text("title", payload.title.as_deref()).check(
        payload.number.is_none_or(|n| n > 0),
        "number",
        "Chapter number must be positive!",
    );
    errors.finish()?;

    let chapter = ChapterService::new(&state.db)
        .update(
            &chapter_id,
            UpdateChapterParams {
                status: parse_content_status(payload.status.as_deref())?,
                number: payload.number,
                title: payload.title.map(|t| t.trim().to_string()),
                description: payload.description,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(chapter.into_dto())))
}

/// Delete a chapter with its lessons.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    delete,
    path = "/api/chapters/{chapter_id}",
    tag = CHAPTER_TAG,
    params(
        ("chapter_id" = String, Path, description = "Chapter ID")
    ),
    responses(
        (status = 200, description = "Chapter deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Chapter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chapter(
    State(state): State<AppState>,
    session: Session,
    Path(chapter_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Chapter(
            chapter_id.clone(),
        ))])
        .await?;

    ChapterService::new(&state.db).delete(&chapter_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Chapter deleted!"))))
}
