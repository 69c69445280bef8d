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
        lesson_test::{CreateLessonTestDto, LessonTestDto, QuestionDto, UpdateLessonTestDto},
    },
    server::{
        controller::parse_content_status,
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::ContentRef,
            lesson_test::{CreateLessonTestParams, Question, UpdateLessonTestParams},
        },
        service::lesson_test::LessonTestService,
        state::AppState,
    },
};

/// Tag for grouping lesson test endpoints in OpenAPI documentation
pub static TEST_TAG: &str = "test";

/// Converts and validates submitted questions.
fn parse_questions(
    errors: &mut ValidationErrors,
    questions: Vec<QuestionDto>,
) -> Vec<Question> {
    errors.check(
        !questions.is_empty(),
        "questions",
        "At least one question is required!",
    );

    let questions: Vec<Question> = questions.into_iter().map(Question::from_dto).collect();
    for question in &questions {
        errors
            .check(
                !question.question.trim().is_empty(),
                "questions",
                "Question text is required!",
            )
            .check(
                question.has_valid_answer(),
                "questions",
                "Answer must be one of a, b, c or d!",
            );
    }

    questions
}

/// Create a test under a lesson.
///
/// # Access Control
/// - `WriteContent` on the lesson - Course author, ADMIN or ROOT
#[utoipa::path(
    post,
    path = "/api/tests",
    tag = TEST_TAG,
    request_body = CreateLessonTestDto,
    responses(
        (status = 201, description = "Test created", body = LessonTestDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_test(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLessonTestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Lesson(
            payload.lesson_id.clone(),
        ))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors.require_text("title", &payload.title);
    let questions = parse_questions(&mut errors, payload.questions);
    errors.finish()?;

    let test = LessonTestService::new(&state.db)
        .create(CreateLessonTestParams {
            lesson_id: payload.lesson_id,
            number: payload.number,
            title: payload.title.trim().to_string(),
            description: payload.description,
            questions,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(test.into_dto())))
}

/// Get a test.
///
/// # Access Control
/// - `ReadContent` - Enrolled learner, course author, ADMIN or ROOT
#[utoipa::path(
    get,
    path = "/api/tests/{test_id}",
    tag = TEST_TAG,
    params(
        ("test_id" = String, Path, description = "Test ID")
    ),
    responses(
        (status = 200, description = "Test", body = LessonTestDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Test not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_test(
    State(state): State<AppState>,
    session: Session,
    Path(test_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ReadContent(ContentRef::Test(test_id.clone()))])
        .await?;

    let test = LessonTestService::new(&state.db).get_by_id(&test_id).await?;

    Ok((StatusCode::OK, Json(test.into_dto())))
}

/// Update a test.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    put,
    path = "/api/tests/{test_id}",
    tag = TEST_TAG,
    params(
        ("test_id" = String, Path, description = "Test ID")
    ),
    request_body = UpdateLessonTestDto,
    responses(
        (status = 200, description = "Test updated", body = LessonTestDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Test not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_test(
    State(state): State<AppState>,
    session: Session,
    Path(test_id): Path<String>,
    Json(payload): Json<UpdateLessonTestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Test(test_id.clone()))])
        .await?;

    let mut errors = ValidationErrors::new();
    errors.optional_text("title", payload.title.as_deref());
    let questions = payload
        .questions
        .map(|questions| parse_questions(&mut errors, questions));
    errors.finish()?;

    let test = LessonTestService::new(&state.db)
        .update(
            &test_id,
            UpdateLessonTestParams {
                status: parse_content_status(payload.status.as_deref())?,
                number: payload.number,
                title: payload.title.map(|t| t.trim().to_string()),
                description: payload.description,
                questions,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(test.into_dto())))
}

/// Delete a test.
///
/// # Access Control
/// - `WriteContent` - Course author, ADMIN or ROOT
#[utoipa::path(
    delete,
    path = "/api/tests/{test_id}",
    tag = TEST_TAG,
    params(
        ("test_id" = String, Path, description = "Test ID")
    ),
    responses(
        (status = 200, description = "Test deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Permission denied", body = ErrorDto),
        (status = 404, description = "Test not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_test(
    State(state): State<AppState>,
    session: Session,
    Path(test_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WriteContent(ContentRef::Test(test_id.clone()))])
        .await?;

    LessonTestService::new(&state.db).delete(&test_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Test deleted!"))))
}
