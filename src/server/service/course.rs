//! Course management, catalog and enrollment.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        chapter::ChapterRepository, course::CourseRepository, enrollment::EnrollmentRepository,
        is_unique_violation, lesson::LessonRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        chapter::Chapter,
        course::{
            total_pages, Course, CourseContent, CourseSummary, CreateCourseParams,
            PaginatedCourses, UpdateCourseParams,
        },
        enrollment::Enrollment,
        lesson::Lesson,
        role::ContentStatus,
        user::User,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db).create(params).await?;

        tracing::info!("Course {} created by {}", course.id, course.author_id);

        Course::from_entity(course)
    }

    /// Gets a course by id, failing with "Course not found!".
    pub async fn get_by_id(&self, id: &str) -> Result<Course, AppError> {
        let Some(course) = CourseRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Course not found!".to_string()));
        };

        Course::from_entity(course)
    }

    async fn get_active(&self, id: &str) -> Result<Course, AppError> {
        let course = self.get_by_id(id).await?;

        if course.status != ContentStatus::Active {
            return Err(AppError::NotFound("Course not found!".to_string()));
        }

        Ok(course)
    }

    /// Lists active courses with pagination.
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCourses, AppError> {
        let (courses, total) = CourseRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?;

        let courses: Result<Vec<_>, _> = courses.into_iter().map(Course::from_entity).collect();

        Ok(PaginatedCourses {
            courses: courses?,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets the public overview of an active course.
    ///
    /// Courses that are not active are reported as missing.
    pub async fn get_summary(&self, id: &str) -> Result<CourseSummary, AppError> {
        let course = self.get_active(id).await?;

        let author = UserRepository::new(self.db)
            .find_by_id(&course.author_id)
            .await?
            .map(User::from_entity)
            .transpose()?;
        let chapter_count = ChapterRepository::new(self.db)
            .count_by_course(&course.id)
            .await?;
        let learner_count = EnrollmentRepository::new(self.db)
            .count_by_course(&course.id)
            .await?;

        Ok(CourseSummary {
            author_name: author.map(|a| a.full_name()).unwrap_or_default(),
            course,
            chapter_count,
            learner_count,
        })
    }

    /// Gets the full course tree, chapters ordered by number and lessons by position.
    pub async fn get_content(&self, id: &str) -> Result<CourseContent, AppError> {
        let course = self.get_by_id(id).await?;

        let chapters = ChapterRepository::new(self.db)
            .get_by_course(&course.id)
            .await?;
        let chapter_ids = chapters.iter().map(|c| c.id.clone()).collect();
        let lessons = LessonRepository::new(self.db)
            .get_by_chapters(chapter_ids)
            .await?;

        let mut lessons_by_chapter: HashMap<String, Vec<Lesson>> = HashMap::new();
        for lesson in lessons {
            let lesson = Lesson::from_entity(lesson)?;
            lessons_by_chapter
                .entry(lesson.chapter_id.clone())
                .or_default()
                .push(lesson);
        }

        let mut tree = Vec::with_capacity(chapters.len());
        for chapter in chapters {
            let chapter = Chapter::from_entity(chapter)?;
            let lessons = lessons_by_chapter.remove(&chapter.id).unwrap_or_default();
            tree.push((chapter, lessons));
        }

        Ok(CourseContent {
            course,
            chapters: tree,
        })
    }

    pub async fn update(&self, id: &str, params: UpdateCourseParams) -> Result<Course, AppError> {
        let Some(course) = CourseRepository::new(self.db).update(id, params).await? else {
            return Err(AppError::NotFound("Course not found!".to_string()));
        };

        Course::from_entity(course)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if CourseRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound("Course not found!".to_string()));
        }

        tracing::info!("Course {} deleted", id);

        Ok(())
    }

    /// Enrolls a learner in an active course at its current price.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment
    /// - `Err(AppError::NotFound)` - Course missing or not active
    /// - `Err(AppError::BadRequest)` - Learner already joined the course
    pub async fn enroll(&self, user_id: &str, course_id: &str) -> Result<Enrollment, AppError> {
        let enrollment_repo = EnrollmentRepository::new(self.db);

        let course = self.get_active(course_id).await?;

        if enrollment_repo.exists(user_id, &course.id).await? {
            return Err(AppError::BadRequest(
                "You already joined this course!".to_string(),
            ));
        }

        let enrollment = enrollment_repo
            .create(user_id, &course.id, course.price)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AppError::BadRequest("You already joined this course!".to_string())
                } else {
                    err.into()
                }
            })?;

        tracing::info!("User {} enrolled in course {}", user_id, course.id);

        Ok(Enrollment::from_entity(enrollment))
    }
}
