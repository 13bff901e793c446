use crate::catalog::{Catalog, CatalogError};
use crate::server::convert::lesson_patch_from_proto;
use crate::server::proto::{LessonResponse, UpdateLessonRequest};
use tonic::{Response, Status};
use tracing::info;

use super::lesson_response;

/// Patch a lesson in place. Section and position changes are stored as given
/// without shifting other lessons; `MoveLesson` is the reindexing path.
pub async fn update_lesson(
    catalog: &Catalog,
    req: UpdateLessonRequest,
) -> Result<Response<LessonResponse>, Status> {
    let id = req.id;
    let result = match lesson_patch_from_proto(req) {
        Ok(patch) => {
            if patch.touches_ordering() {
                info!(lesson_id = id, "Updating lesson placement without reindexing");
            }
            catalog.update_lesson(id, patch).await
        }
        Err(e) => Err(CatalogError::from(e)),
    };
    lesson_response(catalog, result)
}
