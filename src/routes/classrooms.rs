use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::common::NameLookupQuery;
use crate::models::classrooms::requests::{
    ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ClassroomService;
use crate::utils::SafeIDI64;

static CLASSROOM_SERVICE: Lazy<ClassroomService> = Lazy::new(ClassroomService::new_lazy);

pub async fn list_classrooms(
    req: HttpRequest,
    query: web::Query<ClassroomListParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.list_classrooms(query.into_inner(), &req).await
}

pub async fn find_classroom(
    req: HttpRequest,
    query: web::Query<NameLookupQuery>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.find_classroom_by_name(query.into_inner().name, &req).await
}

pub async fn get_classroom(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.get_classroom(id.0, &req).await
}

pub async fn create_classroom(
    req: HttpRequest,
    data: web::Json<CreateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.create_classroom(data.into_inner(), &req).await
}

pub async fn update_classroom(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .update_classroom(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_classroom(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.delete_classroom(id.0, &req).await
}

pub async fn list_classroom_students(
    req: HttpRequest,
    id: SafeIDI64,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .list_classroom_students(id.0, query.into_inner(), &req)
        .await
}

pub async fn import_students(
    req: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.import_students(payload, &req).await
}

pub fn configure_classrooms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classrooms")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_classrooms))
                    .route("", web::post().to(create_classroom))
                    .route("/search", web::get().to(find_classroom))
                    .service(
                        web::resource("/import")
                            .wrap(middlewares::RateLimit::import())
                            .route(web::post().to(import_students)),
                    )
                    .route("/{id}/students", web::get().to(list_classroom_students))
                    .route("/{id}", web::get().to(get_classroom))
                    .route("/{id}", web::put().to(update_classroom))
                    .route("/{id}", web::delete().to(delete_classroom)),
            ),
    );
}
