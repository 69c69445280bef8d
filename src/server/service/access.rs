//! Access-control engine for the course resource tree.
//!
//! Decides whether a principal may read or write content under a course from three
//! facts: the principal's role, whether they authored the course and whether an
//! enrollment links them to it. Every operation returns `Result<_, AppError>`; a
//! denial is `AppError::AuthErr(AuthError::AccessDenied)` and a missing record is
//! `AppError::NotFound`. Checks never mutate data.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attachment::AttachmentRepository, chapter::ChapterRepository,
        comment::CommentRepository, course::CourseRepository, enrollment::EnrollmentRepository,
        lesson::LessonRepository, lesson_test::LessonTestRepository, user::UserRepository,
    },
    error::{
        auth::{AuthError, NOT_COURSE_AUTHOR},
        AppError,
    },
    model::{
        access::{AccessFacts, ContentRef, CourseOwner},
        role::Role,
    },
    util::id::same_id,
};

pub struct AccessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that a principal may read the content of a course.
    ///
    /// Allowed when an enrollment links the principal and the course, the principal is
    /// ROOT or ADMIN, or the principal authored the course. The principal lookup and the
    /// enrollment lookup are independent and run concurrently.
    ///
    /// # Arguments
    /// - `principal_id` - Id of the acting user
    /// - `course_id` - Course being read
    /// - `course_author_id` - Author of that course
    ///
    /// # Returns
    /// - `Ok(())` - Read allowed
    /// - `Err(AppError::NotFound)` - Principal does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Read denied
    pub async fn can_read(
        &self,
        principal_id: &str,
        course_id: &str,
        course_author_id: &str,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let enrollment_repo = EnrollmentRepository::new(self.db);

        let (principal, enrolled) = tokio::try_join!(
            user_repo.find_by_id(principal_id),
            enrollment_repo.exists(principal_id, course_id),
        )?;

        let Some(principal) = principal else {
            return Err(AppError::NotFound("User not found!".to_string()));
        };

        let facts = AccessFacts {
            role: Role::try_from(principal.role)?,
            enrolled,
            is_author: same_id(principal_id, course_author_id),
        };

        if facts.allows_read() {
            return Ok(());
        }

        Err(AuthError::permission_denied(
            principal_id,
            format!("read denied on course {} ({:?})", course_id, facts),
        )
        .into())
    }

    /// Checks that a principal may create, update or delete content under a course.
    ///
    /// Allowed when the principal is ROOT or ADMIN or authored the course. Enrollment
    /// never grants write. A missing principal is reported before a missing course.
    ///
    /// # Returns
    /// - `Ok(())` - Write allowed
    /// - `Err(AppError::NotFound)` - Principal or course does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Write denied
    pub async fn can_write(&self, course_id: &str, principal_id: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let course_repo = CourseRepository::new(self.db);

        let (principal, course) = tokio::try_join!(
            user_repo.find_by_id(principal_id),
            course_repo.find_by_id(course_id),
        )?;

        let Some(principal) = principal else {
            return Err(AppError::NotFound("User not found!".to_string()));
        };
        let Some(course) = course else {
            return Err(AppError::NotFound("Course not found!".to_string()));
        };

        let facts = AccessFacts {
            role: Role::try_from(principal.role)?,
            enrolled: false,
            is_author: same_id(principal_id, &course.author_id),
        };

        if facts.allows_write() {
            return Ok(());
        }

        Err(AuthError::permission_denied(
            principal_id,
            format!("write denied on course {} ({:?})", course_id, facts),
        )
        .into())
    }

    /// Checks that the requester is the author of a course.
    ///
    /// Used where only the author may act, regardless of role.
    ///
    /// # Returns
    /// - `Ok(())` - Requester is the author
    /// - `Err(AppError::AuthErr(AccessDenied))` - "This course is not yours."
    pub fn assert_author(author_id: &str, requester_id: &str) -> Result<(), AppError> {
        if same_id(author_id, requester_id) {
            return Ok(());
        }

        Err(AuthError::AccessDenied {
            user_id: requester_id.to_string(),
            reason: format!("not the author ({})", author_id),
            message: NOT_COURSE_AUTHOR.to_string(),
        }
        .into())
    }

    /// Resolves a resource to the course it belongs to and that course's author.
    ///
    /// Walks the parent chain one link at a time until the course is reached.
    ///
    /// # Returns
    /// - `Ok(CourseOwner)` - Course id and author id
    /// - `Err(AppError::NotFound)` - `"<Kind> not found!"` for the first missing link
    pub async fn resolve_course(&self, target: &ContentRef) -> Result<CourseOwner, AppError> {
        let mut current = target.clone();

        loop {
            let parent = match &current {
                ContentRef::Course(id) => {
                    let course = CourseRepository::new(self.db).find_by_id(id).await?;
                    let Some(course) = course else {
                        return Err(AppError::NotFound(current.not_found_message()));
                    };

                    return Ok(CourseOwner {
                        course_id: course.id,
                        author_id: course.author_id,
                    });
                }
                ContentRef::Chapter(id) => ChapterRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .map(|chapter| ContentRef::Course(chapter.course_id)),
                ContentRef::Lesson(id) => LessonRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .map(|lesson| ContentRef::Chapter(lesson.chapter_id)),
                ContentRef::Test(id) => LessonTestRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .map(|test| ContentRef::Lesson(test.lesson_id)),
                ContentRef::Attachment(id) => AttachmentRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .map(|attachment| ContentRef::Lesson(attachment.lesson_id)),
                ContentRef::Comment(id) => CommentRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .map(|comment| ContentRef::Lesson(comment.lesson_id)),
            };

            match parent {
                Some(parent) => current = parent,
                None => return Err(AppError::NotFound(current.not_found_message())),
            }
        }
    }

    /// Resolves `target` and checks that the principal may read its course.
    pub async fn require_read(
        &self,
        principal_id: &str,
        target: &ContentRef,
    ) -> Result<CourseOwner, AppError> {
        let owner = self.resolve_course(target).await?;

        self.can_read(principal_id, &owner.course_id, &owner.author_id)
            .await?;

        Ok(owner)
    }

    /// Resolves `target` and checks that the principal may write under its course.
    pub async fn require_write(
        &self,
        principal_id: &str,
        target: &ContentRef,
    ) -> Result<CourseOwner, AppError> {
        let owner = self.resolve_course(target).await?;

        self.can_write(&owner.course_id, principal_id).await?;

        Ok(owner)
    }
}
