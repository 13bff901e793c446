use crate::catalog::{Catalog, CatalogError};
use crate::lesson::{ContentType, Lesson};
use crate::server::convert::lesson_to_proto;
use crate::server::helpers::count_u32;
use crate::server::proto::{
    GetLessonRequest, LessonResponse, ListCourseLessonsRequest, ListLessonsRequest,
    ListLessonsResponse,
};
use tonic::{Response, Status};

use super::{error_json, lesson_response};

pub async fn get_lesson(
    catalog: &Catalog,
    req: GetLessonRequest,
) -> Result<Response<LessonResponse>, Status> {
    lesson_response(catalog, catalog.get_lesson(req.id).await)
}

pub async fn list_lessons(
    catalog: &Catalog,
    req: ListLessonsRequest,
) -> Result<Response<ListLessonsResponse>, Status> {
    list_response(catalog, catalog.list_lessons(req.section_id).await)
}

/// Lessons of one content type across a course, e.g. all of its quizzes.
pub async fn list_course_lessons(
    catalog: &Catalog,
    req: ListCourseLessonsRequest,
) -> Result<Response<ListLessonsResponse>, Status> {
    let result = match req.content_type.parse::<ContentType>() {
        Ok(content_type) => catalog.lessons_by_course(req.course_id, content_type).await,
        Err(e) => Err(CatalogError::from(e)),
    };
    list_response(catalog, result)
}

fn list_response(
    catalog: &Catalog,
    result: Result<Vec<Lesson>, CatalogError>,
) -> Result<Response<ListLessonsResponse>, Status> {
    match result {
        Ok(lessons) => Ok(Response::new(ListLessonsResponse {
            success: true,
            error: String::new(),
            total_count: count_u32(lessons.len()),
            lessons: lessons.iter().map(lesson_to_proto).collect(),
        })),
        Err(e) => Ok(Response::new(ListLessonsResponse {
            success: false,
            error: error_json(catalog, &e),
            lessons: vec![],
            total_count: 0,
        })),
    }
}
