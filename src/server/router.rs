use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        attachment::{self, ATTACHMENT_TAG},
        auth::{self, AUTH_TAG},
        chapter::{self, CHAPTER_TAG},
        comment::{self, COMMENT_TAG},
        course::{self, COURSE_TAG},
        lesson::{self, LESSON_TAG},
        lesson_test::{self, TEST_TAG},
        report::{self, REPORT_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "LMS API", description = "Courses, lessons and learners"),
    tags(
        (name = AUTH_TAG, description = "Signup, login and session"),
        (name = COURSE_TAG, description = "Course catalog, content and enrollment"),
        (name = CHAPTER_TAG, description = "Course chapters"),
        (name = LESSON_TAG, description = "Chapter lessons"),
        (name = TEST_TAG, description = "Multiple-choice lesson tests"),
        (name = ATTACHMENT_TAG, description = "Lesson attachments"),
        (name = COMMENT_TAG, description = "Lesson comments"),
        (name = USER_TAG, description = "Profiles, passwords and own courses"),
        (name = ADMIN_TAG, description = "User administration"),
        (name = REPORT_TAG, description = "Admin dashboard and public rankings"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::signup))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(course::get_courses, course::create_course))
        .routes(routes!(
            course::get_course_summary,
            course::update_course,
            course::delete_course
        ))
        .routes(routes!(course::get_course_content))
        .routes(routes!(course::enroll_course))
        .routes(routes!(chapter::create_chapter))
        .routes(routes!(
            chapter::get_chapter,
            chapter::update_chapter,
            chapter::delete_chapter
        ))
        .routes(routes!(lesson::create_lesson))
        .routes(routes!(
            lesson::get_lesson,
            lesson::update_lesson,
            lesson::delete_lesson
        ))
        .routes(routes!(lesson_test::create_test))
        .routes(routes!(
            lesson_test::get_test,
            lesson_test::update_test,
            lesson_test::delete_test
        ))
        .routes(routes!(attachment::create_attachment))
        .routes(routes!(
            attachment::get_attachment,
            attachment::update_attachment,
            attachment::delete_attachment
        ))
        .routes(routes!(comment::create_comment))
        .routes(routes!(
            comment::get_comment,
            comment::update_comment,
            comment::delete_comment
        ))
        .routes(routes!(user::get_teaching_courses))
        .routes(routes!(user::get_learning_courses))
        .routes(routes!(user::get_profile, user::update_profile))
        .routes(routes!(user::change_password))
        .routes(routes!(user::get_public_profile))
        .routes(routes!(admin::get_users))
        .routes(routes!(admin::update_user, admin::delete_user))
        .routes(routes!(report::get_dashboard))
        .routes(routes!(report::get_top_teachers))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
