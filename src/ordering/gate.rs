use super::record::GroupId;
use crate::store::StoreError;
use async_trait::async_trait;

/// Decides whether a group may receive records.
///
/// A reindexer asks its gate while it holds the target group's lock, so a
/// caller that removes a group under that same lock (see
/// [`super::Reindexer::purge_group`]) can never race a record into it.
#[async_trait]
pub trait GroupGate: Send + Sync {
    async fn admits(&self, group_id: GroupId) -> Result<bool, StoreError>;
}
