//! Course syllabus daemon: lessons ordered inside sections, sections ordered
//! inside courses, every grouping kept dense by the [`ordering::Reindexer`].
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::cast_possible_truncation
    )
)]

pub mod catalog;
pub mod cors;
pub mod grpc_logging;
pub mod lesson;
pub mod logging;
pub mod metrics;
pub mod ordering;
pub mod section;
pub mod server;
pub mod store;
pub mod user_config;
pub mod utils;

pub use catalog::{Catalog, CatalogError};
pub use lesson::{ContentType, Lesson, LessonPatch, NewLesson};
pub use ordering::{GroupId, OrderedRecord, OrderingError, RecordId, Reindexer, ShiftRange};
pub use section::{NewSection, Section, SectionPatch};
pub use server::SyllabusDaemonService;
pub use store::{MarkdownStore, MemoryStore, RecordStore, StoreError};

/// Encoded descriptor set for gRPC reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("syllabus_descriptor");
