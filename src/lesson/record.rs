use super::types::{Lesson, LessonPatch, NewLesson};
use crate::ordering::{GroupId, OrderedRecord, RecordId};
use crate::store::{Document, MarkdownRecord, StoreError};

impl OrderedRecord for Lesson {
    type New = NewLesson;
    type Patch = LessonPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn group_id(&self) -> GroupId {
        self.section_id
    }

    fn order_number(&self) -> u32 {
        self.order_number
    }

    fn placement(new: &NewLesson) -> (GroupId, u32) {
        (new.section_id, new.order_number)
    }

    fn create(id: RecordId, new: NewLesson, now: &str) -> Self {
        Lesson {
            id,
            section_id: new.section_id,
            title: new.title,
            content_type: new.content_type,
            content_url: new.content_url,
            content: new.content,
            duration: new.duration,
            order_number: new.order_number,
            is_free: new.is_free,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn place(&mut self, group_id: GroupId, order_number: u32, now: &str) {
        self.section_id = group_id;
        self.order_number = order_number;
        self.updated_at = now.to_string();
    }

    fn patch_placement(patch: &LessonPatch) -> (Option<GroupId>, Option<u32>) {
        (patch.section_id, patch.order_number)
    }

    fn apply(&mut self, patch: LessonPatch, now: &str) {
        if let Some(section_id) = patch.section_id {
            self.section_id = section_id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content_type) = patch.content_type {
            self.content_type = Some(content_type);
        }
        if let Some(content_url) = patch.content_url {
            self.content_url = Some(content_url);
        }
        if let Some(content) = patch.content {
            self.content = Some(content);
        }
        if let Some(duration) = patch.duration {
            self.duration = Some(duration);
        }
        if let Some(order_number) = patch.order_number {
            self.order_number = order_number;
        }
        if let Some(is_free) = patch.is_free {
            self.is_free = is_free;
        }
        self.updated_at = now.to_string();
    }
}

/// Custom field keys of a lesson file.
const SECTION_ID: &str = "sectionId";
const ORDER_NUMBER: &str = "orderNumber";
const CONTENT_TYPE: &str = "contentType";
const CONTENT_URL: &str = "contentUrl";
const CONTENT: &str = "content";
const DURATION: &str = "duration";
const IS_FREE: &str = "isFree";

impl MarkdownRecord for Lesson {
    const TYPE_NAME: &'static str = "Lesson";

    fn to_document(&self) -> Result<Document, StoreError> {
        let mut doc = Document::new(self.id);
        doc.set_title(&self.title);
        doc.set_text(CONTENT, self.content.as_deref());
        doc.set(SECTION_ID, self.section_id)?;
        doc.set(ORDER_NUMBER, self.order_number)?;
        doc.set(CONTENT_TYPE, self.content_type)?;
        doc.set(CONTENT_URL, &self.content_url)?;
        doc.set(DURATION, self.duration)?;
        doc.set(IS_FREE, self.is_free)?;
        doc.created_at.clone_from(&self.created_at);
        doc.updated_at.clone_from(&self.updated_at);
        Ok(doc)
    }

    fn from_document(id: RecordId, doc: &Document) -> Result<Self, StoreError> {
        Ok(Lesson {
            id,
            section_id: doc.get(SECTION_ID)?,
            title: doc.title(),
            content_type: doc.get(CONTENT_TYPE)?,
            content_url: doc.get(CONTENT_URL)?,
            content: doc.text(CONTENT),
            duration: doc.get(DURATION)?,
            order_number: doc.get(ORDER_NUMBER)?,
            is_free: doc.get::<Option<bool>>(IS_FREE)?.unwrap_or(false),
            created_at: doc.created_at.clone(),
            updated_at: doc.updated_at.clone(),
        })
    }
}
