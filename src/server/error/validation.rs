//! Field validation for request bodies.

use crate::{model::api::FieldErrorDto, server::error::AppError};

/// Message attached to a single invalid field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field,
            message: self.message,
        }
    }
}

/// Collects field errors and turns them into a single `AppError::Validation`.
///
/// ```rust,ignore
/// let mut errors = ValidationErrors::new();
/// errors.require_text("title", &payload.title);
/// errors.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` when `valid` is false.
    pub fn check(&mut self, valid: bool, field: &str, message: &str) -> &mut Self {
        if !valid {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    /// Records an error when `value` is blank.
    pub fn require_text(&mut self, field: &str, value: &str) -> &mut Self {
        let message = format!("{} is required!", field);
        self.check(!value.trim().is_empty(), field, &message)
    }

    /// Records an error when an optional value is present but blank.
    pub fn optional_text(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => self.require_text(field, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `Err(AppError::Validation)` when any error was recorded.
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}
