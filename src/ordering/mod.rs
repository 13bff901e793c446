//! Dense, gap-free ordering of records inside a parent group.
//!
//! A record (a lesson inside a section, a section inside a course) holds a
//! 1-based `order_number` that is unique within its group. The [`Reindexer`]
//! keeps that sequence dense across insert, delete and move by issuing bulk
//! conditional shifts through a [`crate::store::RecordStore`].
mod error;
mod gate;
mod locks;
mod range;
mod record;
mod reindexer;

pub use error::OrderingError;
pub use gate::GroupGate;
pub use locks::GroupLocks;
pub use range::{shifted, ShiftRange};
pub use record::{GroupId, OrderedRecord, RecordId};
pub use reindexer::Reindexer;
