use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluation_answers::requests::{
    CreateEvaluationAnswerRequest, EvaluationAnswerListParams,
};
use crate::models::users::entities::UserRole;
use crate::services::EvaluationAnswerService;
use crate::utils::SafeIDI64;

static EVALUATION_ANSWER_SERVICE: Lazy<EvaluationAnswerService> =
    Lazy::new(EvaluationAnswerService::new_lazy);

pub async fn list_answers(
    req: HttpRequest,
    query: web::Query<EvaluationAnswerListParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_ANSWER_SERVICE
        .list_answers(query.into_inner(), &req)
        .await
}

pub async fn create_answer(
    req: HttpRequest,
    data: web::Json<CreateEvaluationAnswerRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_ANSWER_SERVICE
        .create_answer(data.into_inner(), &req)
        .await
}

pub async fn delete_answer(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_ANSWER_SERVICE.delete_answer(id.0, &req).await
}

/// 单条答案维护，仅管理员
pub fn configure_evaluation_answers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluation-answers")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_answers))
            .route("", web::post().to(create_answer))
            .route("/{id}", web::delete().to(delete_answer)),
    );
}
