use crate::catalog::Catalog;
use crate::server::proto::{
    LessonResponse, MoveLessonRequest, ReconcileResponse, ReconcileSectionRequest,
};
use tonic::{Response, Status};

use super::{lesson_response, reconcile_response};

pub async fn move_lesson(
    catalog: &Catalog,
    req: MoveLessonRequest,
) -> Result<Response<LessonResponse>, Status> {
    let result = catalog
        .move_lesson(req.id, req.target_section_id, req.target_position)
        .await;
    lesson_response(catalog, result)
}

pub async fn reconcile_section(
    catalog: &Catalog,
    req: ReconcileSectionRequest,
) -> Result<Response<ReconcileResponse>, Status> {
    reconcile_response(catalog, catalog.reconcile_section(req.section_id).await)
}
