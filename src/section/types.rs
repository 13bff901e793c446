use crate::ordering::{GroupId, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: RecordId,
    pub course_id: GroupId,
    pub title: String,
    pub description: Option<String>,
    /// 1-based position inside the course.
    pub order_number: u32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSection {
    pub course_id: GroupId,
    pub title: String,
    pub description: Option<String>,
    pub order_number: u32,
}

/// Partial section update; `course_id` and `order_number` are written
/// without reindexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPatch {
    pub course_id: Option<GroupId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub order_number: Option<u32>,
}
