use crate::lesson::ParseContentTypeError;
use crate::ordering::RecordId;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Lesson not found: {0}")]
    LessonNotFound(RecordId),

    #[error("Section not found: {0}")]
    SectionNotFound(RecordId),

    #[error("Invalid position {0}: positions start at 1")]
    InvalidPosition(u32),

    #[error("Title is required")]
    TitleRequired,

    #[error(transparent)]
    InvalidContentType(#[from] ParseContentTypeError),

    #[error("Store failure: {0}")]
    StoreError(#[from] StoreError),
}
