use crate::catalog::Catalog;
use crate::server::proto::{
    MoveSectionRequest, ReconcileCourseRequest, ReconcileResponse, SectionResponse,
};
use tonic::{Response, Status};

use super::{reconcile_response, section_response};

pub async fn move_section(
    catalog: &Catalog,
    req: MoveSectionRequest,
) -> Result<Response<SectionResponse>, Status> {
    let result = catalog
        .move_section(req.id, req.target_course_id, req.target_position)
        .await;
    section_response(catalog, result)
}

pub async fn reconcile_course(
    catalog: &Catalog,
    req: ReconcileCourseRequest,
) -> Result<Response<ReconcileResponse>, Status> {
    reconcile_response(catalog, catalog.reconcile_course(req.course_id).await)
}
