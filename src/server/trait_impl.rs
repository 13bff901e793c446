use crate::metrics::{generate_request_id, OperationTimer};
use tonic::{Request, Response, Status};
use tracing::instrument;

use super::handlers;
use super::proto::syllabus_daemon_server::SyllabusDaemon;
use super::proto::*;
use super::SyllabusDaemonService;

#[tonic::async_trait]
impl SyllabusDaemon for SyllabusDaemonService {
    #[instrument(
        name = "grpc.create_lesson",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn create_lesson(
        &self,
        request: Request<CreateLessonRequest>,
    ) -> Result<Response<LessonResponse>, Status> {
        let _timer = OperationTimer::new("create_lesson");
        handlers::lesson_create::create_lesson(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.get_lesson",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn get_lesson(
        &self,
        request: Request<GetLessonRequest>,
    ) -> Result<Response<LessonResponse>, Status> {
        let _timer = OperationTimer::new("get_lesson");
        handlers::lesson_read::get_lesson(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.list_lessons",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn list_lessons(
        &self,
        request: Request<ListLessonsRequest>,
    ) -> Result<Response<ListLessonsResponse>, Status> {
        let _timer = OperationTimer::new("list_lessons");
        handlers::lesson_read::list_lessons(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.update_lesson",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn update_lesson(
        &self,
        request: Request<UpdateLessonRequest>,
    ) -> Result<Response<LessonResponse>, Status> {
        let _timer = OperationTimer::new("update_lesson");
        handlers::lesson_update::update_lesson(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.delete_lesson",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn delete_lesson(
        &self,
        request: Request<DeleteLessonRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let _timer = OperationTimer::new("delete_lesson");
        handlers::lesson_delete::delete_lesson(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.move_lesson",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn move_lesson(
        &self,
        request: Request<MoveLessonRequest>,
    ) -> Result<Response<LessonResponse>, Status> {
        let _timer = OperationTimer::new("move_lesson");
        handlers::lesson_move::move_lesson(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.reconcile_section",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn reconcile_section(
        &self,
        request: Request<ReconcileSectionRequest>,
    ) -> Result<Response<ReconcileResponse>, Status> {
        let _timer = OperationTimer::new("reconcile_section");
        handlers::lesson_move::reconcile_section(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.list_course_lessons",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn list_course_lessons(
        &self,
        request: Request<ListCourseLessonsRequest>,
    ) -> Result<Response<ListLessonsResponse>, Status> {
        let _timer = OperationTimer::new("list_course_lessons");
        handlers::lesson_read::list_course_lessons(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.create_section",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn create_section(
        &self,
        request: Request<CreateSectionRequest>,
    ) -> Result<Response<SectionResponse>, Status> {
        let _timer = OperationTimer::new("create_section");
        handlers::section_create::create_section(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.get_section",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn get_section(
        &self,
        request: Request<GetSectionRequest>,
    ) -> Result<Response<SectionResponse>, Status> {
        let _timer = OperationTimer::new("get_section");
        handlers::section_read::get_section(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.list_sections",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn list_sections(
        &self,
        request: Request<ListSectionsRequest>,
    ) -> Result<Response<ListSectionsResponse>, Status> {
        let _timer = OperationTimer::new("list_sections");
        handlers::section_read::list_sections(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.update_section",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn update_section(
        &self,
        request: Request<UpdateSectionRequest>,
    ) -> Result<Response<SectionResponse>, Status> {
        let _timer = OperationTimer::new("update_section");
        handlers::section_update::update_section(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.delete_section",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn delete_section(
        &self,
        request: Request<DeleteSectionRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let _timer = OperationTimer::new("delete_section");
        handlers::section_delete::delete_section(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.move_section",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn move_section(
        &self,
        request: Request<MoveSectionRequest>,
    ) -> Result<Response<SectionResponse>, Status> {
        let _timer = OperationTimer::new("move_section");
        handlers::section_move::move_section(self.catalog(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.reconcile_course",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn reconcile_course(
        &self,
        request: Request<ReconcileCourseRequest>,
    ) -> Result<Response<ReconcileResponse>, Status> {
        let _timer = OperationTimer::new("reconcile_course");
        handlers::section_move::reconcile_course(self.catalog(), request.into_inner()).await
    }
}
