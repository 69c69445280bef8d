//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They implement business rules, coordinate repository calls, convert entity models
//! into domain models and report failures as `AppError`.
//!
//! `access` is the access-control engine every other service and the auth guard rely on.

pub mod access;
pub mod admin;
pub mod attachment;
pub mod auth;
pub mod chapter;
pub mod comment;
pub mod course;
pub mod lesson;
pub mod lesson_test;
pub mod report;
pub mod user;

#[cfg(test)]
mod test;
