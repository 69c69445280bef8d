//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories take parent
//! identifiers explicitly so tests control the shape of the course tree.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let teacher = factory::user::UserFactory::new(&db).role(3).build().await?;
//!     let course = factory::course::create_course(&db, &teacher.id).await?;
//!
//!     // Whole tree down to a lesson
//!     let tree = factory::helpers::create_lesson_tree(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `course` - Create course entities
//! - `chapter` - Create chapter entities
//! - `lesson` - Create lesson entities
//! - `lesson_test` - Create lesson test entities
//! - `attachment` - Create attachment entities
//! - `comment` - Create comment entities
//! - `enrollment` - Create enrollment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod attachment;
pub mod chapter;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod helpers;
pub mod lesson;
pub mod lesson_test;
pub mod user;

pub use attachment::create_attachment;
pub use chapter::create_chapter;
pub use comment::create_comment;
pub use course::create_course;
pub use enrollment::create_enrollment;
pub use lesson::create_lesson;
pub use lesson_test::create_lesson_test;
pub use user::create_user;
