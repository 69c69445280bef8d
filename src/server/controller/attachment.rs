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
        attachment::{AttachmentDto, CreateAttachmentDto, UpdateAttachmentDto},
    },
    server::{
        controller::parse_content_status,
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::ContentRef,
            attachment::{CreateAttachmentParams, UpdateAttachmentParams},
        },
        service::attachment::AttachmentService,
        state::AppState,
    },
};

/// Tag for grouping attachment endpoints in OpenAPI documentation
pub static ATTACHMENT_TAG: &str = "attachment";

/// Attach a file URL to a lesson.
///
/// # Access Control
/// - `WriteContent` on the lesson - Course author, ADMIN or ROOT
#[utoipa::path(
    post,
    path = "/api/attachments",
    tag = ATTACHMENT_TAG,
    request_body = CreateAttachmentDto,
    responses(
        (status = 201, description = "Attachment created", body = AttachmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_attachment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAttachmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Lesson(
            payload.lesson_id.clone(),
        ))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors
        .require_text("title", &payload.title)
        .require_text("url", &payload.url);
    errors.finish()?;

    let attachment = AttachmentService::new(&state.db)
        .create(CreateAttachmentParams {
            lesson_id: payload.lesson_id,
            number: payload.number,
            title: payload.title.trim().to_string(),
            description: payload.description,
            url: payload.url.trim().to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(attachment.into_dto())))
}

/// Get an attachment.
///
/// # Access Control
/// - `ReadContent` - Enrolled learner, course author, ADMIN or ROOT
#[utoipa::path(
    get,
    path = "/api/attachments/{attachment_id}",
    tag = ATTACHMENT_TAG,
    params(
        ("attachment_id" = String, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Attachment", body = AttachmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Attachment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attachment(
    State(state): State<AppState>,
    session: Session,
    Path(attachment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ReadContent(ContentRef::Attachment(
            attachment_id.clone(),
        ))])
        .await?;

    let attachment = AttachmentService::new(&state.db)
        .get_by_id(&attachment_id)
        .await?;

    Ok((StatusCode::OK, Json(attachment.into_dto())))
}

/// Update an attachment.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    put,
    path = "/api/attachments/{attachment_id}",
    tag = ATTACHMENT_TAG,
    params(
        ("attachment_id" = String, Path, description = "Attachment ID")
    ),
    request_body = UpdateAttachmentDto,
    responses(
        (status = 200, description = "Attachment updated", body = AttachmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Attachment not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_attachment(
    State(state): State<AppState>,
    session: Session,
    Path(attachment_id): Path<String>,
    Json(payload): Json<UpdateAttachmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Attachment(
            attachment_id.clone(),
        ))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors
        .optional_text("title", payload.title.as_deref())
        .optional_text("url", payload.url.as_deref());
    errors.finish()?;

    let attachment = AttachmentService::new(&state.db)
        .update(
            &attachment_id,
            UpdateAttachmentParams {
                status: parse_content_status(payload.status.as_deref())?,
                number: payload.number,
                title: payload.title.map(|t| t.trim().to_string()),
                description: payload.description,
                url: payload.url.map(|u| u.trim().to_string()),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(attachment.into_dto())))
}

/// Delete an attachment.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    delete,
    path = "/api/attachments/{attachment_id}",
    tag = ATTACHMENT_TAG,
    params(
        ("attachment_id" = String, Path, description = "Attachment ID")
    ),
    responses(
        (status = 200, description = "Attachment deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Attachment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_attachment(
    State(state): State<AppState>,
    session: Session,
    Path(attachment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Attachment(
            attachment_id.clone(),
        ))])
        .await?;

    AttachmentService::new(&state.db)
        .delete(&attachment_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Attachment deleted!"))))
}
