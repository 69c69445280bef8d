//! Database repository layer for all domain entities.
//!
//! Repositories borrow the database connection, perform CRUD through SeaORM entities and
//! return entity models or `DbErr`. Conversion into domain models happens in the
//! service layer.

use sea_orm::{DbErr, SqlErr};

pub mod attachment;
pub mod chapter;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod lesson_test;
pub mod user;

/// True when an insert or update failed on a unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod test;
