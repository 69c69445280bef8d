//! Access-control decision model.
//!
//! `AccessFacts` holds the three facts the engine decides on. The decision itself is
//! a pure function of those facts so it can be checked exhaustively without a database.

use std::fmt;

use crate::server::model::role::Role;

/// Facts about a principal relative to one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessFacts {
    pub role: Role,
    /// An enrollment links the principal and the course.
    pub enrolled: bool,
    /// The principal authored the course.
    pub is_author: bool,
}

impl AccessFacts {
    /// Read is granted by enrollment, staff role or authorship.
    pub fn allows_read(&self) -> bool {
        self.enrolled || self.role.is_staff() || self.is_author
    }

    /// Write is granted by staff role or authorship. Enrollment never grants write.
    pub fn allows_write(&self) -> bool {
        self.role.is_staff() || self.is_author
    }
}

/// A resource somewhere in a course tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRef {
    Course(String),
    Chapter(String),
    Lesson(String),
    Test(String),
    Attachment(String),
    Comment(String),
}

impl ContentRef {
    pub fn id(&self) -> &str {
        match self {
            ContentRef::Course(id)
            | ContentRef::Chapter(id)
            | ContentRef::Lesson(id)
            | ContentRef::Test(id)
            | ContentRef::Attachment(id)
            | ContentRef::Comment(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentRef::Course(_) => "Course",
            ContentRef::Chapter(_) => "Chapter",
            ContentRef::Lesson(_) => "Lesson",
            ContentRef::Test(_) => "Test",
            ContentRef::Attachment(_) => "Attachment",
            ContentRef::Comment(_) => "Comment",
        }
    }

    /// Message used when this resource does not exist.
    pub fn not_found_message(&self) -> String {
        format!("{} not found!", self.kind())
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// Course a resource belongs to, and that course's author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOwner {
    pub course_id: String,
    pub author_id: String,
}
