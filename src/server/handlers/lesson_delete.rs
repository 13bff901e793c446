use crate::catalog::Catalog;
use crate::server::proto::{DeleteLessonRequest, DeleteResponse};
use tonic::{Response, Status};

use super::delete_response;

pub async fn delete_lesson(
    catalog: &Catalog,
    req: DeleteLessonRequest,
) -> Result<Response<DeleteResponse>, Status> {
    delete_response(catalog, catalog.delete_lesson(req.id).await)
}
