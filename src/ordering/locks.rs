use super::record::GroupId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per group.
///
/// A reindexer operation holds the guards of every group it touches for its
/// whole sequence of store calls, so concurrent operations on the same group
/// run one after another while different groups proceed in parallel.
#[derive(Debug, Default)]
pub struct GroupLocks {
    slots: Mutex<HashMap<GroupId, Arc<Mutex<()>>>>,
}

impl GroupLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutex of `group_id`. Slots nobody holds or waits on are dropped
    /// first; the map's own `Arc` is then the only reference left.
    async fn slot(&self, group_id: GroupId) -> Arc<Mutex<()>> {
        let mut slots = self.slots.lock().await;
        slots.retain(|_, slot| Arc::strong_count(slot) > 1);
        Arc::clone(slots.entry(group_id).or_default())
    }

    /// Number of groups currently tracked.
    pub async fn tracked(&self) -> usize {
        self.slots.lock().await.len()
    }

    /// Lock every listed group. Groups are taken in ascending order so two
    /// moves between the same pair of groups cannot deadlock.
    pub async fn lock_groups(&self, groups: &[GroupId]) -> Vec<OwnedMutexGuard<()>> {
        let mut ordered = groups.to_vec();
        ordered.sort_unstable();
        ordered.dedup();

        let mut guards = Vec::with_capacity(ordered.len());
        for group_id in ordered {
            guards.push(self.slot(group_id).await.lock_owned().await);
        }
        guards
    }
}
