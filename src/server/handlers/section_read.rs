use crate::catalog::Catalog;
use crate::server::convert::section_to_proto;
use crate::server::helpers::count_u32;
use crate::server::proto::{
    GetSectionRequest, ListSectionsRequest, ListSectionsResponse, SectionResponse,
};
use tonic::{Response, Status};

use super::{error_json, section_response};

pub async fn get_section(
    catalog: &Catalog,
    req: GetSectionRequest,
) -> Result<Response<SectionResponse>, Status> {
    section_response(catalog, catalog.get_section(req.id).await)
}

pub async fn list_sections(
    catalog: &Catalog,
    req: ListSectionsRequest,
) -> Result<Response<ListSectionsResponse>, Status> {
    match catalog.list_sections(req.course_id).await {
        Ok(sections) => Ok(Response::new(ListSectionsResponse {
            success: true,
            error: String::new(),
            total_count: count_u32(sections.len()),
            sections: sections.iter().map(section_to_proto).collect(),
        })),
        Err(e) => Ok(Response::new(ListSectionsResponse {
            success: false,
            error: error_json(catalog, &e),
            sections: vec![],
            total_count: 0,
        })),
    }
}
