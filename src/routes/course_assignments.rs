use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::course_assignments::requests::{
    CourseAssignmentListParams, CreateCourseAssignmentRequest, UpdateCourseAssignmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseAssignmentService;
use crate::utils::SafeIDI64;

static COURSE_ASSIGNMENT_SERVICE: Lazy<CourseAssignmentService> =
    Lazy::new(CourseAssignmentService::new_lazy);

pub async fn list_course_assignments(
    req: HttpRequest,
    query: web::Query<CourseAssignmentListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_ASSIGNMENT_SERVICE.list_course_assignments(query.into_inner(), &req).await
}

pub async fn get_course_assignment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_ASSIGNMENT_SERVICE.get_course_assignment(id.0, &req).await
}

pub async fn create_course_assignment(
    req: HttpRequest,
    data: web::Json<CreateCourseAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_ASSIGNMENT_SERVICE.create_course_assignment(data.into_inner(), &req).await
}

pub async fn update_course_assignment(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateCourseAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_ASSIGNMENT_SERVICE
        .update_course_assignment(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_course_assignment(
    req: HttpRequest,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COURSE_ASSIGNMENT_SERVICE.delete_course_assignment(id.0, &req).await
}

pub async fn import_course_assignments(
    req: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    COURSE_ASSIGNMENT_SERVICE.import_course_assignments(payload, &req).await
}

pub fn configure_course_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/course-assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_course_assignments))
                    .route("", web::post().to(create_course_assignment))
                    .service(
                        web::resource("/import")
                            .wrap(middlewares::RateLimit::import())
                            .route(web::post().to(import_course_assignments)),
                    )
                    .route("/{id}", web::get().to(get_course_assignment))
                    .route("/{id}", web::put().to(update_course_assignment))
                    .route("/{id}", web::delete().to(delete_course_assignment)),
            ),
    );
}
