//! Lessons and sections together: the operations the server exposes.
//!
//! Each record type has its own [`Reindexer`]; the catalog adds the checks
//! that span both (a lesson's section must exist, deleting a section removes
//! its lessons) and the course-scoped lesson queries.
mod error;

pub use error::CatalogError;

use crate::lesson::{ContentType, Lesson, LessonPatch, NewLesson};
use crate::ordering::{GroupGate, GroupId, OrderingError, RecordId, Reindexer};
use crate::section::{NewSection, Section, SectionPatch};
use crate::store::{MarkdownStore, MemoryStore, RecordStore, StoreError};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub const LESSONS_FOLDER: &str = "lessons";
pub const SECTIONS_FOLDER: &str = "sections";

/// Lessons may only be placed in sections that exist.
struct SectionExists(Arc<dyn RecordStore<Section>>);

#[async_trait]
impl GroupGate for SectionExists {
    async fn admits(&self, section_id: GroupId) -> Result<bool, StoreError> {
        Ok(self.0.find_by_id(section_id).await?.is_some())
    }
}

pub struct Catalog {
    lessons: Reindexer<Lesson>,
    sections: Reindexer<Section>,
    location: String,
}

impl Catalog {
    /// `location` describes where the data lives; it is echoed in error
    /// responses.
    pub fn new(
        lessons: Arc<dyn RecordStore<Lesson>>,
        sections: Arc<dyn RecordStore<Section>>,
        location: impl Into<String>,
    ) -> Self {
        let gate = Arc::new(SectionExists(Arc::clone(&sections)));
        Self {
            lessons: Reindexer::new(lessons, "lesson").with_gate(gate),
            sections: Reindexer::new(sections, "section"),
            location: location.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<Lesson>::new()),
            Arc::new(MemoryStore::<Section>::new()),
            "memory",
        )
    }

    /// Open Markdown stores under `data_dir/lessons` and `data_dir/sections`.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let lessons = MarkdownStore::<Lesson>::open(data_dir.join(LESSONS_FOLDER)).await?;
        let sections = MarkdownStore::<Section>::open(data_dir.join(SECTIONS_FOLDER)).await?;
        Ok(Self::new(
            Arc::new(lessons),
            Arc::new(sections),
            data_dir.display().to_string(),
        ))
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn lessons(&self) -> &Reindexer<Lesson> {
        &self.lessons
    }

    pub fn sections(&self) -> &Reindexer<Section> {
        &self.sections
    }

    // ── Lessons ─────────────────────────────────────────────────────────────

    pub async fn create_lesson(&self, new: NewLesson) -> Result<Lesson, CatalogError> {
        if new.title.trim().is_empty() {
            return Err(CatalogError::TitleRequired);
        }
        self.lessons.insert(new).await.map_err(lesson_error)
    }

    pub async fn get_lesson(&self, id: RecordId) -> Result<Lesson, CatalogError> {
        self.lessons.find_one(id).await.map_err(lesson_error)
    }

    /// All lessons by id, or one section's lessons in order.
    pub async fn list_lessons(
        &self,
        section_id: Option<GroupId>,
    ) -> Result<Vec<Lesson>, CatalogError> {
        let lessons = match section_id {
            Some(section_id) => self.lessons.find_by_group(section_id).await,
            None => self.lessons.find_all().await,
        };
        lessons.map_err(lesson_error)
    }

    pub async fn update_lesson(
        &self,
        id: RecordId,
        patch: LessonPatch,
    ) -> Result<Lesson, CatalogError> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CatalogError::TitleRequired);
        }
        self.lessons.update(id, patch).await.map_err(lesson_error)
    }

    pub async fn delete_lesson(&self, id: RecordId) -> Result<Lesson, CatalogError> {
        self.lessons.delete(id).await.map_err(lesson_error)
    }

    pub async fn move_lesson(
        &self,
        id: RecordId,
        target_section: GroupId,
        target_position: u32,
    ) -> Result<Lesson, CatalogError> {
        self.lessons
            .move_to(id, target_section, target_position)
            .await
            .map_err(lesson_error)
    }

    pub async fn reconcile_section(&self, section_id: GroupId) -> Result<u32, CatalogError> {
        self.lessons.reconcile(section_id).await.map_err(lesson_error)
    }

    /// Lessons of a course with the given content type, by `order_number`
    /// (ties follow section order).
    pub async fn lessons_by_course(
        &self,
        course_id: GroupId,
        content_type: ContentType,
    ) -> Result<Vec<Lesson>, CatalogError> {
        let sections = self
            .sections
            .find_by_group(course_id)
            .await
            .map_err(section_error)?;
        let mut lessons = Vec::new();
        for section in sections {
            let in_section = self
                .lessons
                .find_by_group(section.id)
                .await
                .map_err(lesson_error)?;
            lessons.extend(
                in_section
                    .into_iter()
                    .filter(|l| l.content_type == Some(content_type)),
            );
        }
        lessons.sort_by_key(|l| l.order_number);
        Ok(lessons)
    }

    // ── Sections ────────────────────────────────────────────────────────────

    pub async fn create_section(&self, new: NewSection) -> Result<Section, CatalogError> {
        if new.title.trim().is_empty() {
            return Err(CatalogError::TitleRequired);
        }
        self.sections.insert(new).await.map_err(section_error)
    }

    pub async fn get_section(&self, id: RecordId) -> Result<Section, CatalogError> {
        self.sections.find_one(id).await.map_err(section_error)
    }

    pub async fn list_sections(
        &self,
        course_id: Option<GroupId>,
    ) -> Result<Vec<Section>, CatalogError> {
        let sections = match course_id {
            Some(course_id) => self.sections.find_by_group(course_id).await,
            None => self.sections.find_all().await,
        };
        sections.map_err(section_error)
    }

    pub async fn update_section(
        &self,
        id: RecordId,
        patch: SectionPatch,
    ) -> Result<Section, CatalogError> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CatalogError::TitleRequired);
        }
        self.sections.update(id, patch).await.map_err(section_error)
    }

    /// Delete a section, close the gap in its course and remove its lessons.
    ///
    /// The section's lesson group stays locked from before the section goes
    /// until its last lesson is removed, so a lesson created or moved
    /// concurrently either lands first and is removed with the rest, or sees
    /// the section gone.
    pub async fn delete_section(&self, id: RecordId) -> Result<Section, CatalogError> {
        let (section, removed) = self
            .lessons
            .purge_group(id, async {
                self.sections.delete(id).await.map_err(section_error)
            })
            .await?;
        info!(section_id = section.id, lessons_removed = removed, "Deleted section");
        Ok(section)
    }

    pub async fn move_section(
        &self,
        id: RecordId,
        target_course: GroupId,
        target_position: u32,
    ) -> Result<Section, CatalogError> {
        self.sections
            .move_to(id, target_course, target_position)
            .await
            .map_err(section_error)
    }

    pub async fn reconcile_course(&self, course_id: GroupId) -> Result<u32, CatalogError> {
        self.sections
            .reconcile(course_id)
            .await
            .map_err(section_error)
    }
}

fn ordering_error(e: OrderingError, not_found: fn(RecordId) -> CatalogError) -> CatalogError {
    match e {
        OrderingError::NotFound(id) => not_found(id),
        // Only the lesson reindexer is gated, and its groups are sections.
        OrderingError::GroupNotFound(section_id) => CatalogError::SectionNotFound(section_id),
        OrderingError::InvalidPosition(position) => CatalogError::InvalidPosition(position),
        OrderingError::Store(e) => CatalogError::StoreError(e),
    }
}

fn lesson_error(e: OrderingError) -> CatalogError {
    ordering_error(e, CatalogError::LessonNotFound)
}

fn section_error(e: OrderingError) -> CatalogError {
    ordering_error(e, CatalogError::SectionNotFound)
}
