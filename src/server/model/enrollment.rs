//! Enrollment (course purchase) domain model.

use chrono::{DateTime, Utc};

use crate::model::course::EnrollmentDto;

/// Payment status of an enrollment.
pub const PAYMENT_SUCCEEDED: i32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    /// Price paid in minor currency units.
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            course_id: entity.course_id,
            price: entity.price,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            user_id: self.user_id,
            course_id: self.course_id,
            price: self.price,
            created_at: self.created_at,
        }
    }
}
