use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluations::requests::{
    CreateEvaluationRequest, EvaluationListParams, ExportParams, SubmitEvaluationRequest,
    SummaryParams,
};
use crate::models::users::entities::UserRole;
use crate::services::EvaluationService;
use crate::utils::SafeIDI64;

static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn list_evaluations(
    req: HttpRequest,
    query: web::Query<EvaluationListParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_evaluations(query.into_inner(), &req)
        .await
}

pub async fn get_evaluation(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.get_evaluation(id.0, &req).await
}

pub async fn create_evaluation(
    req: HttpRequest,
    data: web::Json<CreateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .create_evaluation(data.into_inner(), &req)
        .await
}

pub async fn delete_evaluation(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.delete_evaluation(id.0, &req).await
}

pub async fn submit_evaluation(
    req: HttpRequest,
    data: web::Json<SubmitEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .submit_evaluation(data.into_inner(), &req)
        .await
}

pub async fn list_pending(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list_pending(&req).await
}

pub async fn summarize_assignments(
    req: HttpRequest,
    query: web::Query<SummaryParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .summarize_assignments(query.into_inner(), &req)
        .await
}

pub async fn summarize_teachers(
    req: HttpRequest,
    query: web::Query<SummaryParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .summarize_teachers(query.into_inner(), &req)
        .await
}

pub async fn teacher_detail(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.teacher_detail(id.0, &req).await
}

pub async fn export_evaluations(
    req: HttpRequest,
    query: web::Query<ExportParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .export_evaluations(query.into_inner(), &req)
        .await
}

// 学生接口必须注册在 scope("") 之前，否则会被教职工范围吞掉
pub fn configure_evaluations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluations")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/pending")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route(web::get().to(list_pending)),
            )
            .service(
                web::resource("/submit")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route(web::post().to(submit_evaluation)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_evaluations))
                    .route("", web::post().to(create_evaluation))
                    .route("/summary/assignments", web::get().to(summarize_assignments))
                    .route("/summary/teachers", web::get().to(summarize_teachers))
                    .route("/summary/teachers/{id}", web::get().to(teacher_detail))
                    .route("/export", web::get().to(export_evaluations))
                    .route("/{id}", web::get().to(get_evaluation))
                    .route("/{id}", web::delete().to(delete_evaluation)),
            ),
    );
}
