//! Admin dashboard aggregates.

use crate::model::report::{DashboardDto, TopCourseDto, TopTeacherDto};

#[derive(Debug, Clone, PartialEq)]
pub struct TopCourse {
    pub id: String,
    pub title: String,
    pub learners: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopTeacher {
    pub id: String,
    pub name: String,
    pub learners: u64,
}

impl TopTeacher {
    pub fn into_dto(self) -> TopTeacherDto {
        TopTeacherDto {
            id: self.id,
            name: self.name,
            learners: self.learners,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub admins: u64,
    pub teachers: u64,
    pub learners: u64,
    pub courses: u64,
    pub enrollments: u64,
    pub revenue: i64,
    pub top_courses: Vec<TopCourse>,
    pub top_teachers: Vec<TopTeacher>,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            admins: self.admins,
            teachers: self.teachers,
            learners: self.learners,
            courses: self.courses,
            enrollments: self.enrollments,
            revenue: self.revenue,
            top_courses: self
                .top_courses
                .into_iter()
                .map(|c| TopCourseDto {
                    id: c.id,
                    title: c.title,
                    learners: c.learners,
                })
                .collect(),
            top_teachers: self
                .top_teachers
                .into_iter()
                .map(|t| t.into_dto())
                .collect(),
        }
    }
}
