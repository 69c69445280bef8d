//! Admin dashboard aggregation.
//!
//! Reads run one after another and are summed in memory; the dashboard tolerates
//! counts taken a few milliseconds apart.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository, user::UserRepository},
    error::AppError,
    model::{
        report::{Dashboard, TopCourse, TopTeacher},
        role::Role,
    },
};

/// Number of entries in each top list.
pub const TOP_LIMIT: usize = 10;

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the dashboard: user counts per role, course and enrollment totals,
    /// revenue and the top courses and teachers by learner count.
    pub async fn dashboard(&self) -> Result<Dashboard, AppError> {
        let user_repo = UserRepository::new(self.db);

        let admins = user_repo.count_by_role(Role::Admin).await?;
        let teachers = user_repo.count_by_role(Role::Teacher).await?;
        let learners = user_repo.count_by_role(Role::Learner).await?;

        let courses = CourseRepository::new(self.db).get_all().await?;
        let enrollments = EnrollmentRepository::new(self.db).get_all().await?;

        let revenue = enrollments.iter().map(|e| e.price).sum();
        let learners_by_course = count_learners(&enrollments);

        let mut top_courses: Vec<TopCourse> = courses
            .iter()
            .map(|course| TopCourse {
                id: course.id.clone(),
                title: course.title.clone(),
                learners: learners_by_course
                    .get(course.id.as_str())
                    .copied()
                    .unwrap_or(0),
            })
            .collect();
        top_courses.sort_by(|a, b| b.learners.cmp(&a.learners).then_with(|| a.title.cmp(&b.title)));
        top_courses.truncate(TOP_LIMIT);

        let top_teachers = self
            .rank_teachers(&courses, &learners_by_course, TOP_LIMIT)
            .await?;

        Ok(Dashboard {
            admins,
            teachers,
            learners,
            courses: courses.len() as u64,
            enrollments: enrollments.len() as u64,
            revenue,
            top_courses,
            top_teachers,
        })
    }

    /// Ranks course authors by the learners enrolled across their courses.
    ///
    /// Ties are broken by name.
    pub async fn top_teachers(&self, count: usize) -> Result<Vec<TopTeacher>, AppError> {
        let courses = CourseRepository::new(self.db).get_all().await?;
        let enrollments = EnrollmentRepository::new(self.db).get_all().await?;

        self.rank_teachers(&courses, &count_learners(&enrollments), count)
            .await
    }

    async fn rank_teachers(
        &self,
        courses: &[entity::course::Model],
        learners_by_course: &HashMap<&str, u64>,
        count: usize,
    ) -> Result<Vec<TopTeacher>, AppError> {
        let mut learners_by_teacher: HashMap<String, u64> = HashMap::new();
        for course in courses {
            let learners = learners_by_course
                .get(course.id.as_str())
                .copied()
                .unwrap_or(0);
            *learners_by_teacher
                .entry(course.author_id.clone())
                .or_default() += learners;
        }

        let teacher_ids = learners_by_teacher.keys().cloned().collect();
        let names: HashMap<String, String> = UserRepository::new(self.db)
            .find_by_ids(teacher_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, format!("{} {}", u.first_name, u.last_name)))
            .collect();

        let mut top_teachers: Vec<TopTeacher> = learners_by_teacher
            .into_iter()
            .map(|(id, learners)| TopTeacher {
                name: names.get(&id).cloned().unwrap_or_default(),
                id,
                learners,
            })
            .collect();
        top_teachers.sort_by(|a, b| b.learners.cmp(&a.learners).then_with(|| a.name.cmp(&b.name)));
        top_teachers.truncate(count);

        Ok(top_teachers)
    }
}

fn count_learners(enrollments: &[entity::enrollment::Model]) -> HashMap<&str, u64> {
    let mut learners_by_course: HashMap<&str, u64> = HashMap::new();
    for enrollment in enrollments {
        *learners_by_course
            .entry(enrollment.course_id.as_str())
            .or_default() += 1;
    }
    learners_by_course
}
