//! Data transfer objects exchanged over the REST API.
//!
//! DTOs are plain serde types annotated for OpenAPI generation. Server-side domain
//! models convert into these at the controller boundary.

pub mod api;
pub mod attachment;
pub mod chapter;
pub mod comment;
pub mod course;
pub mod lesson;
pub mod report;
pub mod user;
