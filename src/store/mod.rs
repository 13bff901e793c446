//! Persistence of ordered records.
//!
//! The [`RecordStore`] trait is the only thing the reindexer talks to.
//! Single-record calls write one record. `bulk_shift` changes every selected
//! record or none: the memory store shifts under one lock, and the Markdown
//! store restores the records it already rewrote when a later write fails.
//! Sequencing several calls into one logical operation is the reindexer's
//! job.
mod error;
mod markdown;
mod memory;

pub use error::StoreError;
pub use markdown::{Document, MarkdownRecord, MarkdownStore};
pub use memory::MemoryStore;

use crate::ordering::{GroupId, OrderedRecord, RecordId, ShiftRange};
use async_trait::async_trait;

#[async_trait]
pub trait RecordStore<R: OrderedRecord>: Send + Sync {
    /// Records of a group, ascending by `order_number` (ties by id).
    async fn find_where(&self, group_id: GroupId) -> Result<Vec<R>, StoreError>;

    /// Every record, ascending by id.
    async fn find_all(&self) -> Result<Vec<R>, StoreError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, StoreError>;

    /// Add `delta` to the `order_number` of every record in `group_id` that
    /// `range` selects. Either all selected records move or, on error, none
    /// do. Returns the number of rows changed.
    async fn bulk_shift(
        &self,
        group_id: GroupId,
        range: ShiftRange,
        delta: i32,
    ) -> Result<u64, StoreError>;

    /// Persist a new record at the placement carried by `new`.
    async fn insert(&self, new: R::New) -> Result<R, StoreError>;

    /// Apply a patch. `None` when the id is unknown.
    async fn update(&self, id: RecordId, patch: R::Patch) -> Result<Option<R>, StoreError>;

    /// Set a record's group and position. `None` when the id is unknown.
    async fn set_position(
        &self,
        id: RecordId,
        group_id: GroupId,
        order_number: u32,
    ) -> Result<Option<R>, StoreError>;

    /// `false` when the id is unknown.
    async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError>;
}

/// Sort records the way `find_where` returns them.
pub(crate) fn sort_by_position<R: OrderedRecord>(records: &mut [R]) {
    records.sort_by_key(|r| (r.order_number(), r.id()));
}
