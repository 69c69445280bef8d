pub use super::attachment::Entity as Attachment;
pub use super::chapter::Entity as Chapter;
pub use super::comment::Entity as Comment;
pub use super::course::Entity as Course;
pub use super::enrollment::Entity as Enrollment;
pub use super::lesson::Entity as Lesson;
pub use super::lesson_test::Entity as LessonTest;
pub use super::user::Entity as User;
