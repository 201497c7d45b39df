use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::common::NameLookupQuery;
use crate::models::levels::requests::{CreateLevelRequest, LevelListParams, UpdateLevelRequest};
use crate::models::users::entities::UserRole;
use crate::services::LevelService;
use crate::utils::SafeIDI64;

static LEVEL_SERVICE: Lazy<LevelService> = Lazy::new(LevelService::new_lazy);

pub async fn list_levels(
    req: HttpRequest,
    query: web::Query<LevelListParams>,
) -> ActixResult<HttpResponse> {
    LEVEL_SERVICE.list_levels(query.into_inner(), &req).await
}

pub async fn find_level(
    req: HttpRequest,
    query: web::Query<NameLookupQuery>,
) -> ActixResult<HttpResponse> {
    LEVEL_SERVICE.find_level_by_name(query.into_inner().name, &req).await
}

pub async fn get_level(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    LEVEL_SERVICE.get_level(id.0, &req).await
}

pub async fn create_level(
    req: HttpRequest,
    data: web::Json<CreateLevelRequest>,
) -> ActixResult<HttpResponse> {
    LEVEL_SERVICE.create_level(data.into_inner(), &req).await
}

pub async fn update_level(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateLevelRequest>,
) -> ActixResult<HttpResponse> {
    LEVEL_SERVICE
        .update_level(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_level(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    LEVEL_SERVICE.delete_level(id.0, &req).await
}

pub fn configure_levels_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/levels")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_levels))
                    .route("", web::post().to(create_level))
                    .route("/search", web::get().to(find_level))
                    .route("/{id}", web::get().to(get_level))
                    .route("/{id}", web::put().to(update_level))
                    .route("/{id}", web::delete().to(delete_level)),
            ),
    );
}
