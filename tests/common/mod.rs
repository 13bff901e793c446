//! Common test utilities

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use syllabus_daemon::{
    GroupId, Lesson, LessonPatch, MemoryStore, NewLesson, RecordId, RecordStore, Reindexer,
    ShiftRange, StoreError,
};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

#[allow(dead_code)] // Test utility for reindexer tests
pub fn new_lesson(section_id: GroupId, title: &str, order_number: u32) -> NewLesson {
    NewLesson {
        section_id,
        title: title.to_string(),
        order_number,
        ..Default::default()
    }
}

#[allow(dead_code)] // Test utility for reindexer tests
/// Insert `titles` at positions `1..` of a section.
pub async fn seed(r: &Reindexer<Lesson>, section_id: GroupId, titles: &[&str]) -> Vec<Lesson> {
    let mut out = Vec::new();
    for (position, title) in (1..).zip(titles) {
        out.push(
            r.insert(new_lesson(section_id, title, position))
                .await
                .expect("seed insert"),
        );
    }
    out
}

#[allow(dead_code)] // Test utility for reindexer tests
/// `(title, order_number)` of a section, in order.
pub async fn layout(r: &Reindexer<Lesson>, section_id: GroupId) -> Vec<(String, u32)> {
    r.find_by_group(section_id)
        .await
        .expect("find_by_group")
        .into_iter()
        .map(|l| (l.title, l.order_number))
        .collect()
}

#[allow(dead_code)] // Test utility for reindexer tests
pub fn expect(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
    pairs.iter().map(|(t, n)| ((*t).to_string(), *n)).collect()
}

/// Wraps a store and fails selected calls on demand.
#[allow(dead_code)] // Not every test binary injects every failure
#[derive(Default)]
pub struct FaultyStore {
    inner: MemoryStore<Lesson>,
    pub fail_insert: AtomicBool,
    pub fail_shift: AtomicBool,
}

#[allow(dead_code)]
impl FaultyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A lesson reindexer backed by this store.
    pub fn reindexer(self: &Arc<Self>) -> Reindexer<Lesson> {
        let store: Arc<dyn RecordStore<Lesson>> = self.clone();
        Reindexer::new(store, "lesson")
    }

    pub fn set(flag: &AtomicBool, on: bool) {
        flag.store(on, Ordering::SeqCst);
    }
}

#[allow(dead_code)]
fn injected(flag: &AtomicBool, what: &str) -> Result<(), StoreError> {
    if flag.load(Ordering::SeqCst) {
        return Err(StoreError::custom(format!("injected {what} failure")));
    }
    Ok(())
}

#[async_trait]
impl RecordStore<Lesson> for FaultyStore {
    async fn find_where(&self, group_id: GroupId) -> Result<Vec<Lesson>, StoreError> {
        self.inner.find_where(group_id).await
    }

    async fn find_all(&self) -> Result<Vec<Lesson>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Lesson>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn bulk_shift(
        &self,
        group_id: GroupId,
        range: ShiftRange,
        delta: i32,
    ) -> Result<u64, StoreError> {
        injected(&self.fail_shift, "shift")?;
        self.inner.bulk_shift(group_id, range, delta).await
    }

    async fn insert(&self, new: NewLesson) -> Result<Lesson, StoreError> {
        injected(&self.fail_insert, "insert")?;
        self.inner.insert(new).await
    }

    async fn update(
        &self,
        id: RecordId,
        patch: LessonPatch,
    ) -> Result<Option<Lesson>, StoreError> {
        self.inner.update(id, patch).await
    }

    async fn set_position(
        &self,
        id: RecordId,
        group_id: GroupId,
        order_number: u32,
    ) -> Result<Option<Lesson>, StoreError> {
        self.inner.set_position(id, group_id, order_number).await
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        self.inner.delete_by_id(id).await
    }
}
