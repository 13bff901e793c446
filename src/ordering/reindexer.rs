use super::error::OrderingError;
use super::gate::GroupGate;
use super::locks::GroupLocks;
use super::range::ShiftRange;
use super::record::{GroupId, OrderedRecord, RecordId};
use crate::store::{RecordStore, StoreError};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, error, warn};

/// Keeps `order_number` unique and dense inside every group of a store.
///
/// Each mutating operation runs under the lock of the group(s) it touches.
/// Reads are passed straight through to the store.
pub struct Reindexer<R: OrderedRecord> {
    store: Arc<dyn RecordStore<R>>,
    locks: GroupLocks,
    gate: Option<Arc<dyn GroupGate>>,
    kind: &'static str,
}

impl<R: OrderedRecord> Reindexer<R> {
    /// `kind` names the record type in log lines (`"lesson"`, `"section"`).
    pub fn new(store: Arc<dyn RecordStore<R>>, kind: &'static str) -> Self {
        Self {
            store,
            locks: GroupLocks::new(),
            gate: None,
            kind,
        }
    }

    /// Only admit records into groups `gate` accepts. Insert, move and
    /// group-changing updates consult it under the target group's lock.
    #[must_use]
    pub fn with_gate(mut self, gate: Arc<dyn GroupGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn store(&self) -> &Arc<dyn RecordStore<R>> {
        &self.store
    }

    /// Insert a record at its requested position.
    ///
    /// Every sibling at or after the position moves up by one in a single
    /// bulk shift, then the record is written. A position past the end of
    /// the group is accepted as-is and leaves a gap.
    ///
    /// A failed shift changes nothing, since a store applies a bulk shift to
    /// all selected records or to none. If the write fails after the shift,
    /// the shift is undone before the error is returned.
    pub async fn insert(&self, new: R::New) -> Result<R, OrderingError> {
        let (group_id, position) = R::placement(&new);
        ensure_position(position)?;
        let _guards = self.locks.lock_groups(&[group_id]).await;
        self.admit(group_id).await?;

        let siblings = self.store.find_where(group_id).await?;
        let shifted = if siblings.iter().any(|s| s.order_number() >= position) {
            self.store
                .bulk_shift(group_id, ShiftRange::AtOrAfter(position), 1)
                .await?
        } else {
            0
        };

        match self.store.insert(new).await {
            Ok(record) => {
                debug!(
                    kind = self.kind,
                    id = record.id(),
                    group_id,
                    position,
                    shifted,
                    "Inserted record"
                );
                Ok(record)
            }
            Err(e) => {
                if shifted > 0 {
                    self.undo_shift(group_id, ShiftRange::After(position), -1)
                        .await;
                }
                Err(e.into())
            }
        }
    }

    /// Delete a record and close the gap it leaves.
    ///
    /// Fails with [`OrderingError::NotFound`] without touching the store when
    /// the id is unknown. When the closing shift fails the record is already
    /// gone; [`Reindexer::reconcile`] repairs the group.
    pub async fn delete(&self, id: RecordId) -> Result<R, OrderingError> {
        let (record, _guards) = self.lock_record(id, None).await?;
        let group_id = record.group_id();
        let position = record.order_number();

        if !self.store.delete_by_id(id).await? {
            return Err(OrderingError::NotFound(id));
        }

        match self
            .store
            .bulk_shift(group_id, ShiftRange::After(position), -1)
            .await
        {
            Ok(shifted) => {
                debug!(kind = self.kind, id, group_id, position, shifted, "Deleted record");
                Ok(record)
            }
            Err(e) => {
                error!(
                    kind = self.kind,
                    id,
                    group_id,
                    error = %e,
                    "Record deleted but gap was not closed; group needs reconcile"
                );
                Err(e.into())
            }
        }
    }

    /// Apply a patch without reindexing.
    ///
    /// A patch that changes the group or the position is written verbatim:
    /// neither the old nor the new group is shifted. Use [`Reindexer::move_to`]
    /// to reposition a record. A position carried by the patch must still be
    /// a valid one.
    pub async fn update(&self, id: RecordId, patch: R::Patch) -> Result<R, OrderingError> {
        let (target_group, position) = R::patch_placement(&patch);
        if let Some(position) = position {
            ensure_position(position)?;
        }
        let (record, _guards) = self.lock_record(id, target_group).await?;
        if let Some(group_id) = target_group.filter(|g| *g != record.group_id()) {
            self.admit(group_id).await?;
        }
        self.store
            .update(id, patch)
            .await?
            .ok_or(OrderingError::NotFound(id))
    }

    /// Move a record to `target_position` inside `target_group`, shifting
    /// siblings in both groups so each stays dense.
    ///
    /// Inside the same group the position is clamped to the group size; into
    /// another group it is clamped to one past the end.
    pub async fn move_to(
        &self,
        id: RecordId,
        target_group: GroupId,
        target_position: u32,
    ) -> Result<R, OrderingError> {
        ensure_position(target_position)?;
        let (record, _guards) = self.lock_record(id, Some(target_group)).await?;
        self.admit(target_group).await?;
        let source_group = record.group_id();
        let old = record.order_number();
        let target_len = len_u32(self.store.find_where(target_group).await?.len());

        let new = if source_group == target_group {
            let new = target_position.min(target_len.max(1));
            if new > old {
                let range = ShiftRange::Between {
                    from: old.saturating_add(1),
                    to: new,
                };
                self.store.bulk_shift(target_group, range, -1).await?;
            } else if new < old {
                let range = ShiftRange::Between {
                    from: new,
                    to: old.saturating_sub(1),
                };
                self.store.bulk_shift(target_group, range, 1).await?;
            } else {
                return Ok(record);
            }
            new
        } else {
            let new = target_position.min(target_len.saturating_add(1));
            self.store
                .bulk_shift(source_group, ShiftRange::After(old), -1)
                .await?;
            self.store
                .bulk_shift(target_group, ShiftRange::AtOrAfter(new), 1)
                .await?;
            new
        };

        let moved = self
            .store
            .set_position(id, target_group, new)
            .await?
            .ok_or(OrderingError::NotFound(id))?;
        debug!(
            kind = self.kind,
            id,
            from_group = source_group,
            from = old,
            to_group = target_group,
            to = new,
            "Moved record"
        );
        Ok(moved)
    }

    /// Rewrite a group's positions to `1..=N`, keeping the current order
    /// (ties broken by id). Returns how many records changed position.
    pub async fn reconcile(&self, group_id: GroupId) -> Result<u32, OrderingError> {
        let _guards = self.locks.lock_groups(&[group_id]).await;
        let mut records = self.store.find_where(group_id).await?;
        records.sort_by_key(|r| (r.order_number(), r.id()));

        let mut reassigned: u32 = 0;
        for (expected, record) in (1..).zip(records.iter()) {
            if record.order_number() != expected {
                self.store
                    .set_position(record.id(), group_id, expected)
                    .await?;
                reassigned = reassigned.saturating_add(1);
            }
        }
        if reassigned > 0 {
            warn!(kind = self.kind, group_id, reassigned, "Reconciled group ordering");
        }
        Ok(reassigned)
    }

    /// Run `first`, then delete every record of `group_id`, both under the
    /// group's lock. Returns what `first` produced and how many records were
    /// removed; nothing is removed when `first` fails.
    ///
    /// Removing a parent in `first` while its gate reports it gone keeps a
    /// concurrent insert from landing in the group after the purge.
    pub async fn purge_group<T, E>(
        &self,
        group_id: GroupId,
        first: impl Future<Output = Result<T, E>>,
    ) -> Result<(T, u32), E>
    where
        E: From<StoreError>,
    {
        let _guards = self.locks.lock_groups(&[group_id]).await;
        let value = first.await?;

        let mut removed: u32 = 0;
        for record in self.store.find_where(group_id).await? {
            if self.store.delete_by_id(record.id()).await? {
                removed = removed.saturating_add(1);
            }
        }
        debug!(kind = self.kind, group_id, removed, "Purged group");
        Ok((value, removed))
    }

    pub async fn find_all(&self) -> Result<Vec<R>, OrderingError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn find_one(&self, id: RecordId) -> Result<R, OrderingError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(OrderingError::NotFound(id))
    }

    /// Records of one group in ascending `order_number`.
    pub async fn find_by_group(&self, group_id: GroupId) -> Result<Vec<R>, OrderingError> {
        Ok(self.store.find_where(group_id).await?)
    }

    /// Read a record and lock its group (plus `also`), re-reading under the
    /// lock until the group observed before locking is still the current one.
    async fn lock_record(
        &self,
        id: RecordId,
        also: Option<GroupId>,
    ) -> Result<(R, Vec<OwnedMutexGuard<()>>), OrderingError> {
        loop {
            let seen = self
                .store
                .find_by_id(id)
                .await?
                .ok_or(OrderingError::NotFound(id))?;
            let mut groups = vec![seen.group_id()];
            groups.extend(also);
            let guards = self.locks.lock_groups(&groups).await;

            let current = self
                .store
                .find_by_id(id)
                .await?
                .ok_or(OrderingError::NotFound(id))?;
            if current.group_id() == seen.group_id() {
                return Ok((current, guards));
            }
        }
    }

    async fn admit(&self, group_id: GroupId) -> Result<(), OrderingError> {
        if let Some(gate) = &self.gate {
            if !gate.admits(group_id).await? {
                return Err(OrderingError::GroupNotFound(group_id));
            }
        }
        Ok(())
    }

    async fn undo_shift(&self, group_id: GroupId, range: ShiftRange, delta: i32) {
        match self.store.bulk_shift(group_id, range, delta).await {
            Ok(restored) => warn!(
                kind = self.kind,
                group_id,
                restored,
                "Write failed after shift; shift undone"
            ),
            Err(e) => error!(
                kind = self.kind,
                group_id,
                error = %e,
                "Write failed after shift and undo failed; group needs reconcile"
            ),
        }
    }
}

fn ensure_position(position: u32) -> Result<(), OrderingError> {
    if position == 0 {
        return Err(OrderingError::InvalidPosition(position));
    }
    Ok(())
}

fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
