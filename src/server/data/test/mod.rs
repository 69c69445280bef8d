use crate::server::{
    data::{
        attachment::AttachmentRepository, chapter::ChapterRepository, comment::CommentRepository,
        course::CourseRepository, enrollment::EnrollmentRepository, is_unique_violation,
        lesson::LessonRepository, lesson_test::LessonTestRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        attachment::{CreateAttachmentParams, UpdateAttachmentParams},
        chapter::UpdateChapterParams,
        comment::CreateCommentParams,
        course::{CreateCourseParams, UpdateCourseParams},
        lesson_test::{CreateLessonTestParams, LessonTest, Question, UpdateLessonTestParams},
        role::{ContentStatus, Role, UserStatus},
        user::{CreateUserParams, UpdateUserAccountParams},
    },
};
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod attachment;
mod comment;
mod enrollment;
mod lesson;
mod lesson_test;
