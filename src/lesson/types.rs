use super::content_type::ContentType;
use crate::ordering::{GroupId, RecordId};
use serde::{Deserialize, Serialize};

/// A lesson inside a course section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: RecordId,
    pub section_id: GroupId,
    pub title: String,
    pub content_type: Option<ContentType>,
    pub content_url: Option<String>,
    pub content: Option<String>,
    /// Duration in minutes.
    pub duration: Option<u32>,
    /// 1-based position inside the section.
    pub order_number: u32,
    pub is_free: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields for creating a lesson at `order_number` inside `section_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLesson {
    pub section_id: GroupId,
    pub title: String,
    pub content_type: Option<ContentType>,
    pub content_url: Option<String>,
    pub content: Option<String>,
    pub duration: Option<u32>,
    pub order_number: u32,
    pub is_free: bool,
}

/// Partial lesson update. `None` leaves a field unchanged.
///
/// `section_id` and `order_number` are written as given; siblings are not
/// reindexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonPatch {
    pub section_id: Option<GroupId>,
    pub title: Option<String>,
    pub content_type: Option<ContentType>,
    pub content_url: Option<String>,
    pub content: Option<String>,
    pub duration: Option<u32>,
    pub order_number: Option<u32>,
    pub is_free: Option<bool>,
}

impl LessonPatch {
    /// Whether the patch would change the lesson's group or position.
    pub fn touches_ordering(&self) -> bool {
        self.section_id.is_some() || self.order_number.is_some()
    }
}
