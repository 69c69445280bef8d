//! SeaORM entity definitions for the learning-management database.
//!
//! Every table owned by the application has one module here. Relations follow the
//! course resource tree: a course owns chapters, a chapter owns lessons, and a
//! lesson owns tests, attachments and comments. Enrollments link learners to courses.

pub mod prelude;

pub mod attachment;
pub mod chapter;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod user;
