//! Course sections, ordered inside their course.
mod record;
mod types;

pub use types::{NewSection, Section, SectionPatch};
