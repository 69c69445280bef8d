use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TopCourseDto {
    pub id: String,
    pub title: String,
    pub learners: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TopTeacherDto {
    pub id: String,
    pub name: String,
    pub learners: u64,
}

/// Admin dashboard figures.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DashboardDto {
    pub admins: u64,
    pub teachers: u64,
    pub learners: u64,
    pub courses: u64,
    pub enrollments: u64,
    /// Sum of all paid prices in minor currency units.
    pub revenue: i64,
    pub top_courses: Vec<TopCourseDto>,
    pub top_teachers: Vec<TopTeacherDto>,
}
