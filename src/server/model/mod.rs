//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models in the service layer and
//! transformed to DTOs at the controller boundary. Role and status tables live in
//! `role`, the pure access decision in `access`.

pub mod access;
pub mod attachment;
pub mod chapter;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod report;
pub mod role;
pub mod user;
