//! File-backed store: one Markdown file per record, kept by `mdstore`.
//!
//! Layout under the store directory:
//!
//! ```text
//! <dir>/
//!   1.md             # record 1
//!   2.md
//! ```
//!
//! Each file is an mdstore item whose id is the record id. Record fields
//! live in the frontmatter's `customFields`; the title is the H1 heading.
//! Deleted records are soft-deleted so their ids are never handed out again.
mod document;

pub use document::Document;

use super::{sort_by_position, RecordStore, StoreError};
use crate::ordering::{shifted, GroupId, OrderedRecord, RecordId, ShiftRange};
use crate::utils::now_iso;
use async_trait::async_trait;
use mdstore::{CreateOptions, Filters, IdStrategy, TypeConfig, TypeFeatures, UpdateOptions};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

/// A record that maps onto an mdstore item.
pub trait MarkdownRecord: OrderedRecord {
    /// Item type name written to the store's `TypeConfig`.
    const TYPE_NAME: &'static str;

    fn to_document(&self) -> Result<Document, StoreError>;

    /// Rebuild the record. `id` is the already-parsed item id.
    fn from_document(id: RecordId, document: &Document) -> Result<Self, StoreError>;
}

pub struct MarkdownStore<R> {
    dir: PathBuf,
    config: TypeConfig,
    lock: Mutex<()>,
    /// Forward writes a bulk shift may still make before it fails.
    #[cfg(test)]
    shift_writes_left: std::sync::atomic::AtomicUsize,
    _record: PhantomData<fn() -> R>,
}

impl<R: MarkdownRecord> MarkdownStore<R> {
    /// Open (creating if needed) a store rooted at `dir`.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        debug!(dir = %dir.display(), kind = R::TYPE_NAME, "Opened markdown store");
        Ok(Self {
            dir,
            config: type_config(R::TYPE_NAME),
            lock: Mutex::new(()),
            #[cfg(test)]
            shift_writes_left: std::sync::atomic::AtomicUsize::new(usize::MAX),
            _record: PhantomData,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every live record. An item that does not decode fails the whole load.
    async fn load(&self) -> Result<Vec<R>, StoreError> {
        mdstore::list(&self.dir, Filters::new())
            .await?
            .iter()
            .map(decode::<R>)
            .collect()
    }

    async fn fetch(&self, id: RecordId) -> Result<Option<R>, StoreError> {
        match mdstore::get(&self.dir, &id.to_string()).await {
            Ok(item) if item.frontmatter.deleted_at.is_none() => decode(&item).map(Some),
            Ok(_) | Err(mdstore::StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, record: &R) -> Result<R, StoreError> {
        let document = record.to_document()?;
        let options = UpdateOptions {
            title: Some(document.title),
            body: Some(document.body),
            status: None,
            priority: None,
            tags: None,
            projects: None,
            custom_fields: document.fields,
            comment: None,
        };
        let item =
            mdstore::update(&self.dir, &self.config, &record.id().to_string(), options).await?;
        decode(&item)
    }

    /// One past the highest id ever stored, soft-deleted records included.
    async fn next_id(&self) -> Result<RecordId, StoreError> {
        let mut highest: RecordId = 0;
        for item in mdstore::list(&self.dir, Filters::new().include_deleted()).await? {
            highest = highest.max(parse_id(&item.id)?);
        }
        highest.checked_add(1).ok_or(StoreError::IdsExhausted)
    }

    async fn write_shifted(&self, record: &R) -> Result<(), StoreError> {
        #[cfg(test)]
        #[allow(deprecated_in_future)]
        {
            use std::sync::atomic::Ordering;
            if self
                .shift_writes_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_err()
            {
                return Err(StoreError::custom("shift write refused"));
            }
        }
        self.write(record).await?;
        Ok(())
    }

    /// Put already-shifted records back at their old positions.
    async fn restore(&self, group_id: GroupId, moved: &[(R, u32)], now: &str) {
        for (record, from) in moved {
            let mut original = record.clone();
            original.place(group_id, *from, now);
            if let Err(e) = self.write(&original).await {
                error!(
                    kind = R::TYPE_NAME,
                    id = original.id(),
                    group_id,
                    error = %e,
                    "Could not restore record after failed shift; group needs reconcile"
                );
            }
        }
    }
}

fn type_config(name: &str) -> TypeConfig {
    TypeConfig {
        name: name.to_string(),
        identifier: IdStrategy::Uuid,
        features: TypeFeatures::default(),
        statuses: Vec::new(),
        default_status: None,
        priority_levels: None,
        custom_fields: Vec::new(),
    }
}

fn parse_id(raw: &str) -> Result<RecordId, StoreError> {
    raw.parse()
        .map_err(|_| StoreError::unreadable(raw, "item id is not a record id"))
}

fn decode<R: MarkdownRecord>(item: &mdstore::Item) -> Result<R, StoreError> {
    let id = parse_id(&item.id)?;
    R::from_document(id, &Document::from_item(item))
}

#[async_trait]
impl<R: MarkdownRecord> RecordStore<R> for MarkdownStore<R> {
    async fn find_where(&self, group_id: GroupId) -> Result<Vec<R>, StoreError> {
        let mut records: Vec<R> = self
            .load()
            .await?
            .into_iter()
            .filter(|r| r.group_id() == group_id)
            .collect();
        sort_by_position(&mut records);
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<R>, StoreError> {
        let mut records = self.load().await?;
        records.sort_by_key(OrderedRecord::id);
        Ok(records)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, StoreError> {
        self.fetch(id).await
    }

    /// Every record is decoded before the first write, so an unreadable
    /// record fails the shift with nothing changed. A failed write puts the
    /// records shifted so far back before the error is returned.
    async fn bulk_shift(
        &self,
        group_id: GroupId,
        range: ShiftRange,
        delta: i32,
    ) -> Result<u64, StoreError> {
        let _guard = self.lock.lock().await;
        let now = now_iso();
        let mut planned: Vec<(R, u32)> = Vec::new();
        for mut record in self.load().await? {
            let from = record.order_number();
            if record.group_id() == group_id && range.contains(from) {
                record.place(group_id, shifted(from, delta), &now);
                planned.push((record, from));
            }
        }

        for (done, (record, _)) in planned.iter().enumerate() {
            if let Err(e) = self.write_shifted(record).await {
                let written = planned.get(..done).unwrap_or_default();
                warn!(
                    kind = R::TYPE_NAME,
                    group_id,
                    restoring = written.len(),
                    error = %e,
                    "Bulk shift failed; restoring shifted records"
                );
                self.restore(group_id, written, &now).await;
                return Err(e);
            }
        }
        Ok(u64::try_from(planned.len()).unwrap_or(u64::MAX))
    }

    async fn insert(&self, new: R::New) -> Result<R, StoreError> {
        let _guard = self.lock.lock().await;
        let id = self.next_id().await?;
        let document = R::create(id, new, &now_iso()).to_document()?;
        let options = CreateOptions {
            title: document.title,
            body: document.body,
            id: Some(document.id),
            status: None,
            priority: None,
            tags: None,
            projects: None,
            custom_fields: document.fields,
            comment: None,
        };
        let item = mdstore::create(&self.dir, &self.config, options).await?;
        decode(&item)
    }

    async fn update(&self, id: RecordId, patch: R::Patch) -> Result<Option<R>, StoreError> {
        let _guard = self.lock.lock().await;
        let Some(mut record) = self.fetch(id).await? else {
            return Ok(None);
        };
        record.apply(patch, &now_iso());
        self.write(&record).await.map(Some)
    }

    async fn set_position(
        &self,
        id: RecordId,
        group_id: GroupId,
        order_number: u32,
    ) -> Result<Option<R>, StoreError> {
        let _guard = self.lock.lock().await;
        let Some(mut record) = self.fetch(id).await? else {
            return Ok(None);
        };
        record.place(group_id, order_number, &now_iso());
        self.write(&record).await.map(Some)
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        if self.fetch(id).await?.is_none() {
            return Ok(false);
        }
        mdstore::soft_delete(&self.dir, &id.to_string()).await?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
