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
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{access::ContentRef, comment::CreateCommentParams},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Comment on a lesson as the logged in user.
///
/// # Access Control
/// - `WriteContent` on the lesson - Course author, ADMIN or ROOT
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Lesson(
            payload.lesson_id.clone(),
        ))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors.require_text("content", &payload.content);
    errors.finish()?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParams {
            lesson_id: payload.lesson_id,
            user_id: user.id,
            content: payload.content.trim().to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Get a comment.
///
/// # Access Control
/// - `ReadContent` - Enrolled learner, course author, ADMIN or ROOT
#[utoipa::path(
    get,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment", body = CommentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ReadContent(ContentRef::Comment(
            comment_id.clone(),
        ))])
        .await?;

    let comment = CommentService::new(&state.db).get_by_id(&comment_id).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Edit a comment.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<String>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Comment(
            comment_id.clone(),
        ))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors.require_text("content", &payload.content);
    errors.finish()?;

    let comment = CommentService::new(&state.db)
        .update(&comment_id, payload.content.trim().to_string())
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Comment(
            comment_id.clone(),
        ))])
        .await?;

    CommentService::new(&state.db).delete(&comment_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Comment deleted!"))))
}
