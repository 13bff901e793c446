use crate::catalog::Catalog;
use crate::server::convert::new_section_from_proto;
use crate::server::proto::{CreateSectionRequest, SectionResponse};
use tonic::{Response, Status};

use super::section_response;

pub async fn create_section(
    catalog: &Catalog,
    req: CreateSectionRequest,
) -> Result<Response<SectionResponse>, Status> {
    let result = catalog.create_section(new_section_from_proto(req)).await;
    section_response(catalog, result)
}
