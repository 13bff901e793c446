use crate::catalog::{Catalog, CatalogError};
use crate::server::convert::new_lesson_from_proto;
use crate::server::proto::{CreateLessonRequest, LessonResponse};
use tonic::{Response, Status};

use super::lesson_response;

/// Insert a lesson at `order_number`, shifting the lessons at or after it.
pub async fn create_lesson(
    catalog: &Catalog,
    req: CreateLessonRequest,
) -> Result<Response<LessonResponse>, Status> {
    let result = match new_lesson_from_proto(req) {
        Ok(new) => catalog.create_lesson(new).await,
        Err(e) => Err(CatalogError::from(e)),
    };
    lesson_response(catalog, result)
}
