use super::record::{GroupId, RecordId};
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderingError {
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("Invalid position {0}: positions start at 1")]
    InvalidPosition(u32),

    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}
