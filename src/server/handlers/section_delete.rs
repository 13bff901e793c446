use crate::catalog::Catalog;
use crate::server::proto::{DeleteResponse, DeleteSectionRequest};
use tonic::{Response, Status};

use super::delete_response;

/// Delete a section together with its lessons.
pub async fn delete_section(
    catalog: &Catalog,
    req: DeleteSectionRequest,
) -> Result<Response<DeleteResponse>, Status> {
    delete_response(catalog, catalog.delete_section(req.id).await)
}
