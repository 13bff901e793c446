use crate::catalog::Catalog;
use crate::server::convert::section_patch_from_proto;
use crate::server::proto::{SectionResponse, UpdateSectionRequest};
use tonic::{Response, Status};

use super::section_response;

pub async fn update_section(
    catalog: &Catalog,
    req: UpdateSectionRequest,
) -> Result<Response<SectionResponse>, Status> {
    let id = req.id;
    let result = catalog
        .update_section(id, section_patch_from_proto(req))
        .await;
    section_response(catalog, result)
}
