use super::{sort_by_position, RecordStore, StoreError};
use crate::ordering::{shifted, GroupId, OrderedRecord, RecordId, ShiftRange};
use crate::utils::now_iso;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store. Every call takes one lock, so each call is atomic.
#[derive(Debug)]
pub struct MemoryStore<R> {
    inner: RwLock<Inner<R>>,
}

#[derive(Debug)]
struct Inner<R> {
    records: BTreeMap<RecordId, R>,
    last_id: RecordId,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<R: OrderedRecord> MemoryStore<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<R: OrderedRecord> RecordStore<R> for MemoryStore<R> {
    async fn find_where(&self, group_id: GroupId) -> Result<Vec<R>, StoreError> {
        let inner = self.inner.read().await;
        let mut records: Vec<R> = inner
            .records
            .values()
            .filter(|r| r.group_id() == group_id)
            .cloned()
            .collect();
        sort_by_position(&mut records);
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.inner.read().await.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, StoreError> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn bulk_shift(
        &self,
        group_id: GroupId,
        range: ShiftRange,
        delta: i32,
    ) -> Result<u64, StoreError> {
        let now = now_iso();
        let mut inner = self.inner.write().await;
        let mut count: u64 = 0;
        for record in inner.records.values_mut() {
            if record.group_id() == group_id && range.contains(record.order_number()) {
                let position = shifted(record.order_number(), delta);
                record.place(group_id, position, &now);
                count = count.saturating_add(1);
            }
        }
        Ok(count)
    }

    async fn insert(&self, new: R::New) -> Result<R, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;
        let record = R::create(id, new, &now_iso());
        inner.last_id = id;
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: RecordId, patch: R::Patch) -> Result<Option<R>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.records.get_mut(&id).map(|record| {
            record.apply(patch, &now_iso());
            record.clone()
        }))
    }

    async fn set_position(
        &self,
        id: RecordId,
        group_id: GroupId,
        order_number: u32,
    ) -> Result<Option<R>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.records.get_mut(&id).map(|record| {
            record.place(group_id, order_number, &now_iso());
            record.clone()
        }))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.records.remove(&id).is_some())
    }
}
