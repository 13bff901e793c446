use super::types::{NewSection, Section, SectionPatch};
use crate::ordering::{GroupId, OrderedRecord, RecordId};
use crate::store::{Document, MarkdownRecord, StoreError};

impl OrderedRecord for Section {
    type New = NewSection;
    type Patch = SectionPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn group_id(&self) -> GroupId {
        self.course_id
    }

    fn order_number(&self) -> u32 {
        self.order_number
    }

    fn placement(new: &NewSection) -> (GroupId, u32) {
        (new.course_id, new.order_number)
    }

    fn create(id: RecordId, new: NewSection, now: &str) -> Self {
        Section {
            id,
            course_id: new.course_id,
            title: new.title,
            description: new.description,
            order_number: new.order_number,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn place(&mut self, group_id: GroupId, order_number: u32, now: &str) {
        self.course_id = group_id;
        self.order_number = order_number;
        self.updated_at = now.to_string();
    }

    fn patch_placement(patch: &SectionPatch) -> (Option<GroupId>, Option<u32>) {
        (patch.course_id, patch.order_number)
    }

    fn apply(&mut self, patch: SectionPatch, now: &str) {
        if let Some(course_id) = patch.course_id {
            self.course_id = course_id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(order_number) = patch.order_number {
            self.order_number = order_number;
        }
        self.updated_at = now.to_string();
    }
}

const COURSE_ID: &str = "courseId";
const ORDER_NUMBER: &str = "orderNumber";
const DESCRIPTION: &str = "description";

impl MarkdownRecord for Section {
    const TYPE_NAME: &'static str = "Section";

    fn to_document(&self) -> Result<Document, StoreError> {
        let mut doc = Document::new(self.id);
        doc.set_title(&self.title);
        doc.set_text(DESCRIPTION, self.description.as_deref());
        doc.set(COURSE_ID, self.course_id)?;
        doc.set(ORDER_NUMBER, self.order_number)?;
        doc.created_at.clone_from(&self.created_at);
        doc.updated_at.clone_from(&self.updated_at);
        Ok(doc)
    }

    fn from_document(id: RecordId, doc: &Document) -> Result<Self, StoreError> {
        Ok(Section {
            id,
            course_id: doc.get(COURSE_ID)?,
            title: doc.title(),
            description: doc.text(DESCRIPTION),
            order_number: doc.get(ORDER_NUMBER)?,
            created_at: doc.created_at.clone(),
            updated_at: doc.updated_at.clone(),
        })
    }
}
