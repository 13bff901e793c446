pub mod lesson_create;
pub mod lesson_delete;
pub mod lesson_move;
pub mod lesson_read;
pub mod lesson_update;
pub mod section_create;
pub mod section_delete;
pub mod section_move;
pub mod section_read;
pub mod section_update;

use crate::catalog::{Catalog, CatalogError};
use crate::lesson::Lesson;
use crate::section::Section;
use crate::server::convert::{lesson_to_proto, section_to_proto};
use crate::server::proto::{DeleteResponse, LessonResponse, ReconcileResponse, SectionResponse};
use crate::server::structured_error::to_error_json;
use tonic::{Response, Status};
use tracing::warn;

fn lesson_response(
    catalog: &Catalog,
    result: Result<Lesson, CatalogError>,
) -> Result<Response<LessonResponse>, Status> {
    match result {
        Ok(lesson) => Ok(Response::new(LessonResponse {
            success: true,
            error: String::new(),
            lesson: Some(lesson_to_proto(&lesson)),
        })),
        Err(e) => Ok(Response::new(LessonResponse {
            success: false,
            error: error_json(catalog, &e),
            lesson: None,
        })),
    }
}

fn section_response(
    catalog: &Catalog,
    result: Result<Section, CatalogError>,
) -> Result<Response<SectionResponse>, Status> {
    match result {
        Ok(section) => Ok(Response::new(SectionResponse {
            success: true,
            error: String::new(),
            section: Some(section_to_proto(&section)),
        })),
        Err(e) => Ok(Response::new(SectionResponse {
            success: false,
            error: error_json(catalog, &e),
            section: None,
        })),
    }
}

fn delete_response<T>(
    catalog: &Catalog,
    result: Result<T, CatalogError>,
) -> Result<Response<DeleteResponse>, Status> {
    match result {
        Ok(_) => Ok(Response::new(DeleteResponse {
            success: true,
            error: String::new(),
        })),
        Err(e) => Ok(Response::new(DeleteResponse {
            success: false,
            error: error_json(catalog, &e),
        })),
    }
}

fn reconcile_response(
    catalog: &Catalog,
    result: Result<u32, CatalogError>,
) -> Result<Response<ReconcileResponse>, Status> {
    match result {
        Ok(reassigned) => Ok(Response::new(ReconcileResponse {
            success: true,
            error: String::new(),
            reassigned,
        })),
        Err(e) => Ok(Response::new(ReconcileResponse {
            success: false,
            error: error_json(catalog, &e),
            reassigned: 0,
        })),
    }
}

/// Store failures are logged here; client errors only go back to the caller.
fn error_json(catalog: &Catalog, e: &CatalogError) -> String {
    if let CatalogError::StoreError(source) = e {
        warn!(store = catalog.location(), error = %source, "Store failure");
    }
    to_error_json(catalog.location(), e)
}
