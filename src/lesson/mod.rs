//! Course lessons, ordered inside their section.
mod content_type;
mod record;
mod types;

pub use content_type::{ContentType, ParseContentTypeError};
pub use types::{Lesson, LessonPatch, NewLesson};
